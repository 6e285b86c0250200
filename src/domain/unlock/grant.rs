//! Unlock grants - persisted records of earned access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::assessment::AssessmentType;

/// One thing a respondent has earned access to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum UnlockGrant {
    /// A follow-on assessment type.
    Assessment(AssessmentType),
    /// An analysis tool.
    Tool(String),
    /// A downloadable resource.
    Resource(String),
}

impl UnlockGrant {
    /// Convenience constructor for tool grants.
    pub fn tool(id: impl Into<String>) -> Self {
        UnlockGrant::Tool(id.into())
    }

    /// Convenience constructor for resource grants.
    pub fn resource(id: impl Into<String>) -> Self {
        UnlockGrant::Resource(id.into())
    }
}

/// The set of grants a respondent currently holds.
///
/// Insertion is idempotent: granting something already granted is a
/// no-op, not a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantSet {
    grants: BTreeSet<UnlockGrant>,
}

impl GrantSet {
    /// Creates an empty grant set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the set contains a grant.
    pub fn contains(&self, grant: &UnlockGrant) -> bool {
        self.grants.contains(grant)
    }

    /// Inserts a grant; returns true only if it was newly added.
    pub fn insert(&mut self, grant: UnlockGrant) -> bool {
        self.grants.insert(grant)
    }

    /// Whether an assessment type is open to the respondent.
    ///
    /// The flagship assessment is always open; everything else requires
    /// an explicit grant.
    pub fn is_assessment_open(&self, ty: AssessmentType) -> bool {
        ty == AssessmentType::Cirf || self.contains(&UnlockGrant::Assessment(ty))
    }

    /// Assessment types held as grants, in stable order.
    pub fn assessments(&self) -> Vec<AssessmentType> {
        self.grants
            .iter()
            .filter_map(|g| match g {
                UnlockGrant::Assessment(ty) => Some(*ty),
                _ => None,
            })
            .collect()
    }

    /// Tool ids held, in stable order.
    pub fn tools(&self) -> Vec<&str> {
        self.grants
            .iter()
            .filter_map(|g| match g {
                UnlockGrant::Tool(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Resource ids held, in stable order.
    pub fn resources(&self) -> Vec<&str> {
        self.grants
            .iter()
            .filter_map(|g| match g {
                UnlockGrant::Resource(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of grants held.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether no grants are held.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Iterates all grants in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &UnlockGrant> {
        self.grants.iter()
    }
}

impl FromIterator<UnlockGrant> for GrantSet {
    fn from_iter<T: IntoIterator<Item = UnlockGrant>>(iter: T) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = GrantSet::new();
        assert!(set.insert(UnlockGrant::tool("tbl-calculator")));
        assert!(!set.insert(UnlockGrant::tool("tbl-calculator")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn cirf_is_always_open() {
        let set = GrantSet::new();
        assert!(set.is_assessment_open(AssessmentType::Cirf));
        assert!(!set.is_assessment_open(AssessmentType::Cimm));
    }

    #[test]
    fn granted_assessment_becomes_open() {
        let mut set = GrantSet::new();
        set.insert(UnlockGrant::Assessment(AssessmentType::Cimm));
        assert!(set.is_assessment_open(AssessmentType::Cimm));
        assert!(!set.is_assessment_open(AssessmentType::Tbl));
    }

    #[test]
    fn grants_partition_by_kind() {
        let set: GrantSet = [
            UnlockGrant::Assessment(AssessmentType::Tbl),
            UnlockGrant::tool("economic-multiplier"),
            UnlockGrant::resource("resource-funding-guide-2026"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.assessments(), vec![AssessmentType::Tbl]);
        assert_eq!(set.tools(), vec!["economic-multiplier"]);
        assert_eq!(set.resources(), vec!["resource-funding-guide-2026"]);
    }

    #[test]
    fn grant_serializes_with_kind_tag() {
        let json = serde_json::to_string(&UnlockGrant::tool("tbl-calculator")).unwrap();
        assert_eq!(json, r#"{"kind":"tool","id":"tbl-calculator"}"#);

        let json = serde_json::to_string(&UnlockGrant::Assessment(AssessmentType::Cimm)).unwrap();
        assert_eq!(json, r#"{"kind":"assessment","id":"cimm"}"#);
    }
}
