//! Static assessment and tool catalog.
//!
//! Defines the six assessments, their unlock relationships, and the
//! analysis tools and downloadable resources each completion grants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The six assessment types offered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    /// Cultural Innovation Resilience Framework - the flagship assessment.
    Cirf,
    /// Cultural Innovation Measurement Matrix.
    Cimm,
    /// Cultural Innovation Readiness Assessment.
    Cira,
    /// Triple Bottom Line Cultural Innovation.
    Tbl,
    /// Cultural Innovation Sustainability Scorecard.
    Ciss,
    /// Cultural Product Pricing Assessment.
    Pricing,
}

/// All assessment types in catalog order.
pub const ALL_ASSESSMENT_TYPES: &[AssessmentType] = &[
    AssessmentType::Cirf,
    AssessmentType::Cimm,
    AssessmentType::Cira,
    AssessmentType::Tbl,
    AssessmentType::Ciss,
    AssessmentType::Pricing,
];

impl AssessmentType {
    /// Returns the lowercase wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Cirf => "cirf",
            AssessmentType::Cimm => "cimm",
            AssessmentType::Cira => "cira",
            AssessmentType::Tbl => "tbl",
            AssessmentType::Ciss => "ciss",
            AssessmentType::Pricing => "pricing",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cirf" => Ok(AssessmentType::Cirf),
            "cimm" => Ok(AssessmentType::Cimm),
            "cira" => Ok(AssessmentType::Cira),
            "tbl" => Ok(AssessmentType::Tbl),
            "ciss" => Ok(AssessmentType::Ciss),
            "pricing" => Ok(AssessmentType::Pricing),
            other => Err(ValidationError::invalid_format(
                "assessment_type",
                format!("unknown assessment type '{}'", other),
            )),
        }
    }
}

/// Catalog entry for one assessment.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentDefinition {
    pub ty: AssessmentType,
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub estimated_minutes: u8,
    /// Credits consumed on submission. 0 = free once unlocked.
    pub credit_cost: u32,
    /// Assessment that must be completed before this one opens.
    pub prerequisite: Option<AssessmentType>,
    /// Assessments unlocked when this one completes.
    pub unlocks: &'static [AssessmentType],
    /// Tool ids granted when this one completes.
    pub grants_tools: &'static [&'static str],
    /// Downloadable resource ids granted when this one completes.
    pub grants_resources: &'static [&'static str],
}

const SECONDARY_ASSESSMENTS: &[AssessmentType] = &[
    AssessmentType::Cimm,
    AssessmentType::Cira,
    AssessmentType::Tbl,
    AssessmentType::Ciss,
    AssessmentType::Pricing,
];

const DEFINITIONS: &[AssessmentDefinition] = &[
    AssessmentDefinition {
        ty: AssessmentType::Cirf,
        name: "CIRF",
        full_name: "Cultural Innovation Resilience Framework",
        description: "Discover your strengths and growth areas across 4 key dimensions.",
        estimated_minutes: 15,
        credit_cost: 1,
        prerequisite: None,
        unlocks: SECONDARY_ASSESSMENTS,
        grants_tools: &[],
        grants_resources: &[
            "resource-funding-guide-2026",
            "resource-creative-reconstruction",
        ],
    },
    AssessmentDefinition {
        ty: AssessmentType::Cimm,
        name: "CIMM",
        full_name: "Cultural Innovation Measurement Matrix",
        description: "See how well you're balancing tradition with innovation.",
        estimated_minutes: 8,
        credit_cost: 0,
        prerequisite: Some(AssessmentType::Cirf),
        unlocks: &[],
        grants_tools: &["innovation-intensity-ratio", "cultural-leverage-index"],
        grants_resources: &[],
    },
    AssessmentDefinition {
        ty: AssessmentType::Cira,
        name: "CIRA",
        full_name: "Cultural Innovation Readiness Assessment",
        description: "Find out if you're ready to scale.",
        estimated_minutes: 8,
        credit_cost: 0,
        prerequisite: Some(AssessmentType::Cirf),
        unlocks: &[],
        grants_tools: &[
            "innovation-readiness-calculator",
            "innovation-inclusivity-score",
        ],
        grants_resources: &[],
    },
    AssessmentDefinition {
        ty: AssessmentType::Tbl,
        name: "TBL-CI",
        full_name: "Triple Bottom Line Cultural Innovation",
        description: "See how your work creates value across profit, people, and planet.",
        estimated_minutes: 8,
        credit_cost: 0,
        prerequisite: Some(AssessmentType::Cirf),
        unlocks: &[],
        grants_tools: &["tbl-calculator", "economic-multiplier"],
        grants_resources: &[],
    },
    AssessmentDefinition {
        ty: AssessmentType::Ciss,
        name: "CISS",
        full_name: "Cultural Innovation Sustainability Scorecard",
        description: "Check if your cultural enterprise can thrive for generations.",
        estimated_minutes: 7,
        credit_cost: 0,
        prerequisite: Some(AssessmentType::Cirf),
        unlocks: &[],
        grants_tools: &["sustainability-scorecard", "cultural-resilience-quotient"],
        grants_resources: &[],
    },
    AssessmentDefinition {
        ty: AssessmentType::Pricing,
        name: "Pricing",
        full_name: "Cultural Product Pricing Assessment",
        description: "Find the right price for your work.",
        estimated_minutes: 6,
        credit_cost: 0,
        prerequisite: Some(AssessmentType::Cirf),
        unlocks: &[],
        grants_tools: &["pricing-calculator", "innovation-efficiency-rate"],
        grants_resources: &[],
    },
];

/// Returns the catalog entry for an assessment type.
pub fn assessment_definition(ty: AssessmentType) -> &'static AssessmentDefinition {
    DEFINITIONS
        .iter()
        .find(|d| d.ty == ty)
        .expect("every assessment type has a catalog entry")
}

/// Category of an analysis tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Measurement,
    Calculator,
    Analysis,
}

/// Catalog entry for one analysis tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub granted_by: AssessmentType,
    pub category: ToolCategory,
}

/// All analysis tools, each tied to the assessment that grants it.
pub const TOOL_DEFINITIONS: &[ToolDefinition] = &[
    ToolDefinition {
        id: "innovation-intensity-ratio",
        name: "Innovation Intensity Ratio",
        granted_by: AssessmentType::Cimm,
        category: ToolCategory::Measurement,
    },
    ToolDefinition {
        id: "cultural-leverage-index",
        name: "Cultural Leverage Index",
        granted_by: AssessmentType::Cimm,
        category: ToolCategory::Measurement,
    },
    ToolDefinition {
        id: "innovation-readiness-calculator",
        name: "Innovation Readiness Calculator",
        granted_by: AssessmentType::Cira,
        category: ToolCategory::Calculator,
    },
    ToolDefinition {
        id: "innovation-inclusivity-score",
        name: "Innovation Inclusivity Score",
        granted_by: AssessmentType::Cira,
        category: ToolCategory::Measurement,
    },
    ToolDefinition {
        id: "tbl-calculator",
        name: "Triple Bottom Line Calculator",
        granted_by: AssessmentType::Tbl,
        category: ToolCategory::Calculator,
    },
    ToolDefinition {
        id: "economic-multiplier",
        name: "Economic Multiplier Effect",
        granted_by: AssessmentType::Tbl,
        category: ToolCategory::Calculator,
    },
    ToolDefinition {
        id: "sustainability-scorecard",
        name: "Sustainability Scorecard",
        granted_by: AssessmentType::Ciss,
        category: ToolCategory::Analysis,
    },
    ToolDefinition {
        id: "cultural-resilience-quotient",
        name: "Cultural Resilience Quotient",
        granted_by: AssessmentType::Ciss,
        category: ToolCategory::Measurement,
    },
    ToolDefinition {
        id: "pricing-calculator",
        name: "Cultural Product Pricing Calculator",
        granted_by: AssessmentType::Pricing,
        category: ToolCategory::Calculator,
    },
    ToolDefinition {
        id: "innovation-efficiency-rate",
        name: "Innovation Efficiency Rate",
        granted_by: AssessmentType::Pricing,
        category: ToolCategory::Measurement,
    },
];

/// Looks up a tool definition by id.
pub fn tool_definition(id: &str) -> Option<&'static ToolDefinition> {
    TOOL_DEFINITIONS.iter().find(|t| t.id == id)
}
