//! Demographics - the structured profile pulled out of the raw answers.
//!
//! Every field is a closed enumeration with an explicit fallback member,
//! so downstream matching always has a value to compare against. The
//! extractor never fails: an unanswered or unrecognized answer resolves
//! to the fallback.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AnswerMap;

/// Organization type, from `demo-org-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationType {
    Cooperative,
    CommunityOrg,
    IndigenousEnterprise,
    CulturalInstitution,
    CraftGuild,
    ForProfit,
    Government,
    Individual,
    Other,
}

impl OrganizationType {
    /// Fallback for unanswered or unrecognized values.
    pub const FALLBACK: Self = OrganizationType::Other;

    /// Parses a wire code, falling back to `Other`.
    pub fn parse_or_fallback(code: Option<&str>) -> Self {
        match code {
            Some("cooperative") => OrganizationType::Cooperative,
            Some("community-org") => OrganizationType::CommunityOrg,
            Some("indigenous-enterprise") => OrganizationType::IndigenousEnterprise,
            Some("cultural-institution") => OrganizationType::CulturalInstitution,
            Some("craft-guild") => OrganizationType::CraftGuild,
            Some("for-profit") => OrganizationType::ForProfit,
            Some("government") => OrganizationType::Government,
            Some("individual") => OrganizationType::Individual,
            _ => Self::FALLBACK,
        }
    }

    /// Plural prose label used in generated context sentences.
    pub fn plural_label(&self) -> &'static str {
        match self {
            OrganizationType::Cooperative => "cooperatives",
            OrganizationType::CommunityOrg => "community organizations",
            OrganizationType::IndigenousEnterprise => "indigenous enterprises",
            OrganizationType::CulturalInstitution => "cultural institutions",
            OrganizationType::CraftGuild => "craft guilds",
            OrganizationType::ForProfit => "cultural businesses",
            OrganizationType::Government => "public agencies",
            OrganizationType::Individual => "individual practitioners",
            OrganizationType::Other => "cultural initiatives",
        }
    }

    /// Singular prose label with article, for profile summaries.
    pub fn singular_label(&self) -> &'static str {
        match self {
            OrganizationType::Cooperative => "a cooperative",
            OrganizationType::CommunityOrg => "a community organization",
            OrganizationType::IndigenousEnterprise => "an indigenous enterprise",
            OrganizationType::CulturalInstitution => "a cultural institution",
            OrganizationType::CraftGuild => "a craft guild",
            OrganizationType::ForProfit => "a cultural business",
            OrganizationType::Government => "a public agency",
            OrganizationType::Individual => "an individual practitioner",
            OrganizationType::Other => "a cultural initiative",
        }
    }
}

/// Cultural sector, from `demo-sector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Crafts,
    PerformingArts,
    VisualArts,
    Music,
    FoodBeverage,
    FashionTextiles,
    HeritageTourism,
    PublishingMedia,
    Design,
    Education,
    Wellness,
    Agriculture,
    MultiSector,
}

impl Industry {
    /// Fallback for unanswered or unrecognized values.
    pub const FALLBACK: Self = Industry::MultiSector;

    /// Parses a wire code, falling back to `MultiSector`.
    pub fn parse_or_fallback(code: Option<&str>) -> Self {
        match code {
            Some("crafts") => Industry::Crafts,
            Some("performing-arts") => Industry::PerformingArts,
            Some("visual-arts") => Industry::VisualArts,
            Some("music") => Industry::Music,
            Some("food-beverage") => Industry::FoodBeverage,
            Some("fashion-textiles") => Industry::FashionTextiles,
            Some("heritage-tourism") => Industry::HeritageTourism,
            Some("publishing-media") => Industry::PublishingMedia,
            Some("design") => Industry::Design,
            Some("education") => Industry::Education,
            Some("wellness") => Industry::Wellness,
            Some("agriculture") => Industry::Agriculture,
            _ => Self::FALLBACK,
        }
    }

    /// Prose label used in generated context sentences.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Crafts => "crafts",
            Industry::PerformingArts => "performing arts",
            Industry::VisualArts => "visual arts",
            Industry::Music => "music",
            Industry::FoodBeverage => "food & beverage",
            Industry::FashionTextiles => "fashion & textiles",
            Industry::HeritageTourism => "heritage tourism",
            Industry::PublishingMedia => "publishing & media",
            Industry::Design => "design",
            Industry::Education => "cultural education",
            Industry::Wellness => "traditional wellness",
            Industry::Agriculture => "cultural agriculture",
            Industry::MultiSector => "multi-sector initiatives",
        }
    }
}

/// Business stage, from `demo-stage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessStage {
    Idea,
    Startup,
    Growth,
    Scaling,
    Established,
}

impl BusinessStage {
    /// Fallback for unanswered or unrecognized values.
    pub const FALLBACK: Self = BusinessStage::Startup;

    /// Parses a wire code, falling back to `Startup`.
    pub fn parse_or_fallback(code: Option<&str>) -> Self {
        match code {
            Some("idea") => BusinessStage::Idea,
            Some("startup") => BusinessStage::Startup,
            Some("growth") => BusinessStage::Growth,
            Some("scaling") => BusinessStage::Scaling,
            Some("established") => BusinessStage::Established,
            _ => Self::FALLBACK,
        }
    }

    /// Prose label ("at the startup stage").
    pub fn stage_label(&self) -> &'static str {
        match self {
            BusinessStage::Idea => "the idea stage",
            BusinessStage::Startup => "the startup stage",
            BusinessStage::Growth => "the growth stage",
            BusinessStage::Scaling => "the scaling stage",
            BusinessStage::Established => "an established stage",
        }
    }
}

/// Team size bracket, from `demo-team-size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "2-5")]
    TwoToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11-25")]
    ElevenToTwentyFive,
    #[serde(rename = "26-50")]
    TwentySixToFifty,
    #[serde(rename = "51+")]
    FiftyOnePlus,
}

impl TeamSize {
    /// Fallback for unanswered or unrecognized values.
    pub const FALLBACK: Self = TeamSize::TwoToFive;

    /// Parses a wire code, falling back to `TwoToFive`.
    pub fn parse_or_fallback(code: Option<&str>) -> Self {
        match code {
            Some("solo") => TeamSize::Solo,
            Some("2-5") => TeamSize::TwoToFive,
            Some("6-10") => TeamSize::SixToTen,
            Some("11-25") => TeamSize::ElevenToTwentyFive,
            Some("26-50") => TeamSize::TwentySixToFifty,
            Some("51+") => TeamSize::FiftyOnePlus,
            _ => Self::FALLBACK,
        }
    }
}

/// World region, from `demo-region`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Africa,
    AsiaPacific,
    Europe,
    LatinAmerica,
    MiddleEast,
    NorthAmerica,
    Oceania,
    Global,
}

impl Region {
    /// Fallback for unanswered or unrecognized values.
    pub const FALLBACK: Self = Region::Global;

    /// Parses a wire code, falling back to `Global`.
    pub fn parse_or_fallback(code: Option<&str>) -> Self {
        match code {
            Some("africa") => Region::Africa,
            Some("asia-pacific") => Region::AsiaPacific,
            Some("europe") => Region::Europe,
            Some("latin-america") => Region::LatinAmerica,
            Some("middle-east") => Region::MiddleEast,
            Some("north-america") => Region::NorthAmerica,
            Some("oceania") => Region::Oceania,
            _ => Self::FALLBACK,
        }
    }
}

/// The structured respondent profile, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub org_type: OrganizationType,
    pub industry: Industry,
    pub business_stage: BusinessStage,
    pub team_size: TeamSize,
    pub region: Region,
    /// Self-reported revenue bracket, kept verbatim; optional context only.
    pub revenue_range: Option<String>,
}

impl Demographics {
    /// Extracts demographics from the raw answer map.
    ///
    /// Reads the designated demographic question ids; any missing or
    /// unrecognized value resolves to the field's fallback member, so
    /// recommendation matching can always proceed.
    pub fn extract(answers: &AnswerMap) -> Self {
        Self {
            org_type: OrganizationType::parse_or_fallback(answers.category("demo-org-type")),
            industry: Industry::parse_or_fallback(answers.category("demo-sector")),
            business_stage: BusinessStage::parse_or_fallback(answers.category("demo-stage")),
            team_size: TeamSize::parse_or_fallback(answers.category("demo-team-size")),
            region: Region::parse_or_fallback(answers.category("demo-region")),
            revenue_range: answers.category("demo-revenue").map(str::to_string),
        }
    }

    /// Context sentence used on every personalized recommendation,
    /// e.g. "For cooperatives in crafts at the startup stage".
    pub fn context_label(&self) -> String {
        format!(
            "For {} in {} at {}",
            self.org_type.plural_label(),
            self.industry.label(),
            self.business_stage.stage_label()
        )
    }

    /// Intro sentence for the personalized results section.
    pub fn profile_summary(&self) -> String {
        format!(
            "Based on your profile as {} in {}, at {}, here are personalized \
             recommendations for strengthening your cultural innovation resilience:",
            self.org_type.singular_label(),
            self.industry.label(),
            self.business_stage.stage_label()
        )
    }
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            org_type: OrganizationType::FALLBACK,
            industry: Industry::FALLBACK,
            business_stage: BusinessStage::FALLBACK,
            team_size: TeamSize::FALLBACK,
            region: Region::FALLBACK,
            revenue_range: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AnswerValue;

    #[test]
    fn extract_reads_all_designated_questions() {
        let mut answers = AnswerMap::new();
        answers.insert("demo-org-type", AnswerValue::Text("cooperative".into()));
        answers.insert("demo-sector", AnswerValue::Text("crafts".into()));
        answers.insert("demo-stage", AnswerValue::Text("startup".into()));
        answers.insert("demo-team-size", AnswerValue::Text("6-10".into()));
        answers.insert("demo-region", AnswerValue::Text("asia-pacific".into()));
        answers.insert("demo-revenue", AnswerValue::Text("10k-50k".into()));

        let demo = Demographics::extract(&answers);
        assert_eq!(demo.org_type, OrganizationType::Cooperative);
        assert_eq!(demo.industry, Industry::Crafts);
        assert_eq!(demo.business_stage, BusinessStage::Startup);
        assert_eq!(demo.team_size, TeamSize::SixToTen);
        assert_eq!(demo.region, Region::AsiaPacific);
        assert_eq!(demo.revenue_range.as_deref(), Some("10k-50k"));
    }

    #[test]
    fn extract_from_empty_answers_uses_fallbacks() {
        let demo = Demographics::extract(&AnswerMap::new());
        assert_eq!(demo, Demographics::default());
        assert_eq!(demo.org_type, OrganizationType::Other);
        assert_eq!(demo.industry, Industry::MultiSector);
        assert_eq!(demo.business_stage, BusinessStage::Startup);
        assert_eq!(demo.team_size, TeamSize::TwoToFive);
        assert_eq!(demo.region, Region::Global);
    }

    #[test]
    fn unrecognized_codes_resolve_to_fallbacks() {
        let mut answers = AnswerMap::new();
        answers.insert("demo-org-type", AnswerValue::Text("megacorp".into()));
        answers.insert("demo-sector", AnswerValue::Text("aerospace".into()));

        let demo = Demographics::extract(&answers);
        assert_eq!(demo.org_type, OrganizationType::Other);
        assert_eq!(demo.industry, Industry::MultiSector);
    }

    #[test]
    fn likert_value_in_demographic_slot_is_ignored() {
        let mut answers = AnswerMap::new();
        answers.insert("demo-org-type", AnswerValue::Likert(4));

        let demo = Demographics::extract(&answers);
        assert_eq!(demo.org_type, OrganizationType::Other);
    }

    #[test]
    fn context_label_reads_naturally() {
        let demo = Demographics {
            org_type: OrganizationType::Cooperative,
            industry: Industry::Crafts,
            business_stage: BusinessStage::Startup,
            ..Demographics::default()
        };
        assert_eq!(
            demo.context_label(),
            "For cooperatives in crafts at the startup stage"
        );
    }

    #[test]
    fn enums_serialize_with_wire_codes() {
        assert_eq!(
            serde_json::to_string(&OrganizationType::CraftGuild).unwrap(),
            "\"craft-guild\""
        );
        assert_eq!(serde_json::to_string(&TeamSize::FiftyOnePlus).unwrap(), "\"51+\"");
        assert_eq!(serde_json::to_string(&Region::AsiaPacific).unwrap(), "\"asia-pacific\"");
    }
}
