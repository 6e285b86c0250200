//! Scoring blueprints - the static question -> construct -> section mapping
//! for each assessment, with section weights and per-question
//! discriminatory weights from the underlying research.

use thiserror::Error;

use super::answer::AnswerMap;
use super::catalog::AssessmentType;

/// A named group of constructs shown together in the survey flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDef {
    pub id: &'static str,
    pub label: &'static str,
    /// Relative weight of this section in the overall score.
    pub weight: f64,
}

/// One scored Likert question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredQuestion {
    pub id: &'static str,
    pub section: &'static str,
    pub construct: &'static str,
    /// Discriminatory weight applied when aggregating the construct into
    /// its section score.
    pub weight: f64,
}

/// Static scoring configuration for one assessment.
#[derive(Debug, Clone, Copy)]
pub struct ScoringBlueprint {
    pub ty: AssessmentType,
    pub sections: &'static [SectionDef],
    pub questions: &'static [ScoredQuestion],
    /// Categorical profile questions; answered but never scored.
    pub demographic_questions: &'static [&'static str],
}

/// Why a submission's answers were rejected before scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionValidationError {
    #[error("at least {required} answered questions are required, got {answered}")]
    TooFewAnswers { required: usize, answered: usize },

    #[error("answer for question '{question}' must be between 1 and 7, got {value}")]
    ValueOutOfRange { question: String, value: i64 },
}

impl ScoringBlueprint {
    /// Returns the blueprint for an assessment type.
    pub fn for_type(ty: AssessmentType) -> &'static ScoringBlueprint {
        match ty {
            AssessmentType::Cirf => &CIRF,
            AssessmentType::Cimm => &CIMM,
            AssessmentType::Cira => &CIRA,
            AssessmentType::Tbl => &TBL,
            AssessmentType::Ciss => &CISS,
            AssessmentType::Pricing => &PRICING,
        }
    }

    /// Looks up a section definition by id.
    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Iterates the scored questions belonging to a section.
    pub fn questions_in_section(
        &self,
        section_id: &str,
    ) -> impl Iterator<Item = &ScoredQuestion> + '_ {
        let section_id = section_id.to_string();
        self.questions
            .iter()
            .filter(move |q| q.section == section_id)
    }

    /// Total number of scored questions.
    pub fn scored_question_count(&self) -> usize {
        self.questions.len()
    }

    /// Validates answers ahead of a credit-consuming submission.
    ///
    /// Rejects numeric answers outside the 1-7 Likert range and requires
    /// at least half of the scored questions to be answered; everything
    /// looser than that is handled by graceful degradation in scoring.
    pub fn validate_submission(
        &self,
        answers: &AnswerMap,
    ) -> Result<(), SubmissionValidationError> {
        for q in self.questions {
            if let Some(value) = answers.get(q.id).and_then(|a| a.as_number()) {
                if !(1..=7).contains(&value) {
                    return Err(SubmissionValidationError::ValueOutOfRange {
                        question: q.id.to_string(),
                        value,
                    });
                }
            }
        }

        let required = (self.questions.len() + 1) / 2;
        let answered = answers.answered_likert_count(self.questions.iter().map(|q| q.id));
        if answered < required {
            return Err(SubmissionValidationError::TooFewAnswers { required, answered });
        }

        Ok(())
    }
}

/// Human-readable label for a construct id.
///
/// The flagship constructs carry curated labels; constructs from the
/// follow-on assessments fall back to a de-camelized form.
pub fn construct_label(construct: &str) -> String {
    let curated = match construct {
        "traditionalKnowledge" => "Traditional Knowledge Documentation",
        "practitionerAccess" => "Practitioner Networks",
        "culturalAuthenticity" => "Cultural Authenticity",
        "communityInvolvement" => "Community Involvement",
        "culturalPreservation" => "Cultural Preservation",
        "culturalMeaning" => "Cultural Meaning Preservation",
        "practitionerRelationships" => "Practitioner Relationships",
        "culturalMembership" => "Cultural Membership",
        "productDevelopment" => "Innovation Pipeline",
        "techniqueCombination" => "Technique Innovation",
        "innovationLeadership" => "Innovation Leadership",
        "marketExpansion" => "Market Expansion",
        "digitalDistribution" => "Digital Distribution",
        "efficiencyImprovement" => "Efficiency Improvement",
        "externalCollaboration" => "External Collaboration",
        "feedbackIteration" => "Feedback & Iteration",
        "adaptiveResponse" => "Adaptive Capacity",
        "learningFromSetbacks" => "Learning Systems",
        "skillDiversity" => "Skill Diversity",
        "externalResources" => "External Resources",
        "ipProtection" => "IP Protection",
        "financialReserves" => "Financial Resilience",
        "communityDecisionMaking" => "Community Governance",
        "benefitDistribution" => "Benefit Distribution",
        "communityOwnership" => "Community Ownership",
        "allianceNetworks" => "Alliance Networks",
        "revenueRetention" => "Revenue Retention",
        "teamRetention" => "Team Retention",
        "recoverySpeed" => "Recovery Speed",
        "opportunityDiscovery" => "Opportunity Discovery",
        "postShockStrength" => "Post-Shock Strength",
        "communitySpillover" => "Community Spillover",
        "jobCreation" => "Job Creation",
        "intergenerationalPlanning" => "Intergenerational Planning",
        _ => "",
    };
    if !curated.is_empty() {
        return curated.to_string();
    }

    // De-camelize: "knowledgeIntegration" -> "Knowledge Integration"
    let mut label = String::with_capacity(construct.len() + 4);
    for (i, ch) in construct.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

/// Demographic question ids shared by the flagship assessment.
const CIRF_DEMOGRAPHICS: &[&str] = &[
    "demo-org-type",
    "demo-sector",
    "demo-stage",
    "demo-team-size",
    "demo-revenue",
    "demo-region",
];

macro_rules! sq {
    ($id:literal, $section:literal, $construct:literal, $weight:literal) => {
        ScoredQuestion {
            id: $id,
            section: $section,
            construct: $construct,
            weight: $weight,
        }
    };
}

static CIRF: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Cirf,
    sections: &[
        SectionDef { id: "culturalCapital", label: "Cultural Capital", weight: 0.25 },
        SectionDef { id: "innovationActivities", label: "Innovation Activities", weight: 0.25 },
        SectionDef { id: "organizationalCapacities", label: "Organizational Capacities", weight: 0.30 },
        SectionDef { id: "economicResilience", label: "Economic Resilience", weight: 0.20 },
    ],
    questions: &[
        sq!("cc-1", "culturalCapital", "traditionalKnowledge", 1.0),
        sq!("cc-2", "culturalCapital", "practitionerAccess", 1.2),
        sq!("cc-3", "culturalCapital", "culturalAuthenticity", 1.3),
        sq!("cc-4", "culturalCapital", "communityInvolvement", 1.4),
        sq!("cc-5", "culturalCapital", "culturalPreservation", 1.1),
        sq!("cc-6", "culturalCapital", "culturalMeaning", 1.0),
        sq!("cc-7", "culturalCapital", "practitionerRelationships", 1.0),
        sq!("cc-8", "culturalCapital", "culturalMembership", 0.9),
        sq!("ia-1", "innovationActivities", "productDevelopment", 1.2),
        sq!("ia-2", "innovationActivities", "techniqueCombination", 1.1),
        sq!("ia-3", "innovationActivities", "innovationLeadership", 1.3),
        sq!("ia-4", "innovationActivities", "marketExpansion", 1.0),
        sq!("ia-5", "innovationActivities", "digitalDistribution", 0.9),
        sq!("ia-6", "innovationActivities", "efficiencyImprovement", 1.0),
        sq!("ia-7", "innovationActivities", "externalCollaboration", 1.1),
        sq!("ia-8", "innovationActivities", "feedbackIteration", 1.2),
        sq!("oc-1", "organizationalCapacities", "adaptiveResponse", 1.5),
        sq!("oc-2", "organizationalCapacities", "learningFromSetbacks", 1.3),
        sq!("oc-3", "organizationalCapacities", "skillDiversity", 1.2),
        sq!("oc-4", "organizationalCapacities", "externalResources", 1.1),
        sq!("oc-5", "organizationalCapacities", "ipProtection", 1.0),
        sq!("oc-6", "organizationalCapacities", "financialReserves", 1.2),
        sq!("oc-7", "organizationalCapacities", "communityDecisionMaking", 1.4),
        sq!("oc-8", "organizationalCapacities", "benefitDistribution", 1.3),
        sq!("oc-9", "organizationalCapacities", "communityOwnership", 1.4),
        sq!("oc-10", "organizationalCapacities", "allianceNetworks", 1.1),
        sq!("er-1", "economicResilience", "revenueRetention", 1.3),
        sq!("er-2", "economicResilience", "teamRetention", 1.2),
        sq!("er-3", "economicResilience", "recoverySpeed", 1.4),
        sq!("er-4", "economicResilience", "opportunityDiscovery", 1.1),
        sq!("er-5", "economicResilience", "postShockStrength", 1.5),
        sq!("er-6", "economicResilience", "communitySpillover", 1.0),
        sq!("er-7", "economicResilience", "jobCreation", 1.1),
        sq!("er-8", "economicResilience", "intergenerationalPlanning", 1.2),
    ],
    demographic_questions: CIRF_DEMOGRAPHICS,
};

static CIMM: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Cimm,
    sections: &[
        SectionDef { id: "innovationDepth", label: "Innovation Depth", weight: 0.25 },
        SectionDef { id: "culturalIntegrity", label: "Cultural Integrity", weight: 0.25 },
        SectionDef { id: "economicImpact", label: "Economic Impact", weight: 0.25 },
        SectionDef { id: "innovationVelocity", label: "Innovation Velocity", weight: 0.25 },
    ],
    questions: &[
        sq!("cimm-id-1", "innovationDepth", "knowledgeIntegration", 1.4),
        sq!("cimm-id-2", "innovationDepth", "techniqueTransformation", 1.3),
        sq!("cimm-id-3", "innovationDepth", "crossCulturalSynthesis", 1.2),
        sq!("cimm-id-4", "innovationDepth", "materialInnovation", 1.1),
        sq!("cimm-id-5", "innovationDepth", "processInnovation", 1.2),
        sq!("cimm-ci-1", "culturalIntegrity", "sourceAuthenticity", 1.5),
        sq!("cimm-ci-2", "culturalIntegrity", "meaningPreservation", 1.4),
        sq!("cimm-ci-3", "culturalIntegrity", "storyTelling", 1.1),
        sq!("cimm-ci-4", "culturalIntegrity", "communityConsent", 1.5),
        sq!("cimm-ci-5", "culturalIntegrity", "culturalRespect", 1.3),
        sq!("cimm-ei-1", "economicImpact", "revenueGrowth", 1.3),
        sq!("cimm-ei-2", "economicImpact", "marketPremium", 1.4),
        sq!("cimm-ei-3", "economicImpact", "communityIncome", 1.5),
        sq!("cimm-ei-4", "economicImpact", "marketExpansion", 1.2),
        sq!("cimm-ei-5", "economicImpact", "investmentReturn", 1.1),
        sq!("cimm-iv-1", "innovationVelocity", "developmentSpeed", 1.2),
        sq!("cimm-iv-2", "innovationVelocity", "ideaPipeline", 1.1),
        sq!("cimm-iv-3", "innovationVelocity", "iterationCycles", 1.3),
        sq!("cimm-iv-4", "innovationVelocity", "launchFrequency", 1.0),
        sq!("cimm-iv-5", "innovationVelocity", "scalingEfficiency", 1.2),
    ],
    demographic_questions: &[],
};

static CIRA: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Cira,
    sections: &[
        SectionDef { id: "culturalCapitalInventory", label: "Cultural Capital Inventory", weight: 0.25 },
        SectionDef { id: "innovationEcosystem", label: "Innovation Ecosystem", weight: 0.25 },
        SectionDef { id: "barriersAssessment", label: "Barriers Assessment", weight: 0.25 },
        SectionDef { id: "readinessIndicators", label: "Readiness Indicators", weight: 0.25 },
    ],
    questions: &[
        sq!("cira-cci-1", "culturalCapitalInventory", "knowledgeDocumentation", 1.3),
        sq!("cira-cci-2", "culturalCapitalInventory", "practitionerNetwork", 1.4),
        sq!("cira-cci-3", "culturalCapitalInventory", "materialAccess", 1.2),
        sq!("cira-cci-4", "culturalCapitalInventory", "storyArchive", 1.1),
        sq!("cira-cci-5", "culturalCapitalInventory", "uniqueAssets", 1.5),
        sq!("cira-ie-1", "innovationEcosystem", "mentorAccess", 1.3),
        sq!("cira-ie-2", "innovationEcosystem", "fundingAccess", 1.4),
        sq!("cira-ie-3", "innovationEcosystem", "partnerNetwork", 1.2),
        sq!("cira-ie-4", "innovationEcosystem", "marketAccess", 1.3),
        sq!("cira-ie-5", "innovationEcosystem", "policySupport", 1.0),
        sq!("cira-ba-1", "barriersAssessment", "skillGaps", 1.3),
        sq!("cira-ba-2", "barriersAssessment", "resourceConstraints", 1.4),
        sq!("cira-ba-3", "barriersAssessment", "marketBarriers", 1.2),
        sq!("cira-ba-4", "barriersAssessment", "culturalResistance", 1.3),
        sq!("cira-ba-5", "barriersAssessment", "regulatoryBarriers", 1.1),
        sq!("cira-ri-1", "readinessIndicators", "leadershipCommitment", 1.5),
        sq!("cira-ri-2", "readinessIndicators", "teamCapability", 1.4),
        sq!("cira-ri-3", "readinessIndicators", "processReadiness", 1.2),
        sq!("cira-ri-4", "readinessIndicators", "marketInsight", 1.3),
        sq!("cira-ri-5", "readinessIndicators", "riskTolerance", 1.1),
    ],
    demographic_questions: &[],
};

static TBL: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Tbl,
    sections: &[
        SectionDef { id: "economicReturns", label: "Economic Returns", weight: 0.34 },
        SectionDef { id: "socialImpact", label: "Social Impact", weight: 0.33 },
        SectionDef { id: "environmentalImpact", label: "Environmental Impact", weight: 0.33 },
    ],
    questions: &[
        sq!("tbl-er-1", "economicReturns", "profitability", 1.3),
        sq!("tbl-er-2", "economicReturns", "revenueGrowth", 1.2),
        sq!("tbl-er-3", "economicReturns", "localEconomicImpact", 1.4),
        sq!("tbl-er-4", "economicReturns", "livelihoodSupport", 1.5),
        sq!("tbl-er-5", "economicReturns", "economicMultiplier", 1.2),
        sq!("tbl-er-6", "economicReturns", "financialResilience", 1.3),
        sq!("tbl-si-1", "socialImpact", "culturalPreservation", 1.5),
        sq!("tbl-si-2", "socialImpact", "communityEmpowerment", 1.4),
        sq!("tbl-si-3", "socialImpact", "skillDevelopment", 1.3),
        sq!("tbl-si-4", "socialImpact", "inclusiveEmployment", 1.4),
        sq!("tbl-si-5", "socialImpact", "communityBenefits", 1.2),
        sq!("tbl-si-6", "socialImpact", "culturalPride", 1.3),
        sq!("tbl-si-7", "socialImpact", "intergenerationalTransfer", 1.5),
        sq!("tbl-ei-1", "environmentalImpact", "sustainableMaterials", 1.4),
        sq!("tbl-ei-2", "environmentalImpact", "wasteReduction", 1.2),
        sq!("tbl-ei-3", "environmentalImpact", "energyEfficiency", 1.1),
        sq!("tbl-ei-4", "environmentalImpact", "traditionalEcoPractices", 1.5),
        sq!("tbl-ei-5", "environmentalImpact", "biodiversityProtection", 1.3),
        sq!("tbl-ei-6", "environmentalImpact", "carbonFootprint", 1.2),
        sq!("tbl-ei-7", "environmentalImpact", "environmentalEducation", 1.0),
    ],
    demographic_questions: &[],
};

static CISS: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Ciss,
    sections: &[
        SectionDef { id: "economicSustainability", label: "Economic Sustainability", weight: 0.25 },
        SectionDef { id: "culturalSustainability", label: "Cultural Sustainability", weight: 0.25 },
        SectionDef { id: "socialSustainability", label: "Social Sustainability", weight: 0.25 },
        SectionDef { id: "environmentalSustainability", label: "Environmental Sustainability", weight: 0.25 },
    ],
    questions: &[
        sq!("ciss-es-1", "economicSustainability", "financialViability", 1.5),
        sq!("ciss-es-2", "economicSustainability", "diversification", 1.3),
        sq!("ciss-es-3", "economicSustainability", "pricingPower", 1.2),
        sq!("ciss-es-4", "economicSustainability", "investmentCapacity", 1.3),
        sq!("ciss-es-5", "economicSustainability", "economicResilience", 1.4),
        sq!("ciss-cs-1", "culturalSustainability", "knowledgeTransmission", 1.5),
        sq!("ciss-cs-2", "culturalSustainability", "practitionerPipeline", 1.4),
        sq!("ciss-cs-3", "culturalSustainability", "authenticityMaintenance", 1.5),
        sq!("ciss-cs-4", "culturalSustainability", "documentationPractice", 1.2),
        sq!("ciss-cs-5", "culturalSustainability", "communityRelevance", 1.3),
        sq!("ciss-ss-1", "socialSustainability", "communityHealth", 1.4),
        sq!("ciss-ss-2", "socialSustainability", "equitableDistribution", 1.5),
        sq!("ciss-ss-3", "socialSustainability", "socialCohesion", 1.2),
        sq!("ciss-ss-4", "socialSustainability", "youthEngagement", 1.4),
        sq!("ciss-env-1", "environmentalSustainability", "resourceStewardship", 1.5),
        sq!("ciss-env-2", "environmentalSustainability", "ecologicalBalance", 1.3),
        sq!("ciss-env-3", "environmentalSustainability", "climateAdaptation", 1.2),
        sq!("ciss-env-4", "environmentalSustainability", "traditionalEcology", 1.4),
    ],
    demographic_questions: &[],
};

static PRICING: ScoringBlueprint = ScoringBlueprint {
    ty: AssessmentType::Pricing,
    sections: &[
        SectionDef { id: "costAnalysis", label: "Cost Analysis", weight: 0.25 },
        SectionDef { id: "valueProposition", label: "Value Proposition", weight: 0.25 },
        SectionDef { id: "marketPositioning", label: "Market Positioning", weight: 0.25 },
        SectionDef { id: "priceOptimization", label: "Price Optimization", weight: 0.25 },
    ],
    questions: &[
        sq!("price-ca-1", "costAnalysis", "costClarity", 1.4),
        sq!("price-ca-2", "costAnalysis", "overheadAllocation", 1.2),
        sq!("price-ca-3", "costAnalysis", "laborValuation", 1.5),
        sq!("price-ca-4", "costAnalysis", "culturalCostInclusion", 1.3),
        sq!("price-vp-1", "valueProposition", "uniquenessRecognition", 1.4),
        sq!("price-vp-2", "valueProposition", "storyValue", 1.3),
        sq!("price-vp-3", "valueProposition", "qualityPerception", 1.4),
        sq!("price-vp-4", "valueProposition", "impactValue", 1.2),
        sq!("price-mp-1", "marketPositioning", "targetSegment", 1.4),
        sq!("price-mp-2", "marketPositioning", "competitiveDifferentiation", 1.3),
        sq!("price-mp-3", "marketPositioning", "pricePerception", 1.2),
        sq!("price-mp-4", "marketPositioning", "premiumJustification", 1.4),
        sq!("price-po-1", "priceOptimization", "pricingStrategy", 1.5),
        sq!("price-po-2", "priceOptimization", "priceVariation", 1.2),
        sq!("price-po-3", "priceOptimization", "priceReview", 1.3),
    ],
    demographic_questions: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::answer::AnswerValue;
    use crate::domain::assessment::catalog::ALL_ASSESSMENT_TYPES;

    #[test]
    fn every_assessment_type_has_a_blueprint() {
        for ty in ALL_ASSESSMENT_TYPES {
            let bp = ScoringBlueprint::for_type(*ty);
            assert_eq!(bp.ty, *ty);
            assert!(!bp.questions.is_empty());
        }
    }

    #[test]
    fn question_counts_match_catalog() {
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Cirf).questions.len(), 34);
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Cimm).questions.len(), 20);
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Cira).questions.len(), 20);
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Tbl).questions.len(), 20);
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Ciss).questions.len(), 18);
        assert_eq!(ScoringBlueprint::for_type(AssessmentType::Pricing).questions.len(), 15);
    }

    #[test]
    fn every_question_references_a_declared_section() {
        for ty in ALL_ASSESSMENT_TYPES {
            let bp = ScoringBlueprint::for_type(*ty);
            for q in bp.questions {
                assert!(
                    bp.section(q.section).is_some(),
                    "question {} references unknown section {}",
                    q.id,
                    q.section
                );
            }
        }
    }

    #[test]
    fn section_weights_sum_to_one() {
        for ty in ALL_ASSESSMENT_TYPES {
            let bp = ScoringBlueprint::for_type(*ty);
            let total: f64 = bp.sections.iter().map(|s| s.weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "{} weights sum to {}", ty, total);
        }
    }

    #[test]
    fn question_ids_are_unique() {
        for ty in ALL_ASSESSMENT_TYPES {
            let bp = ScoringBlueprint::for_type(*ty);
            let mut seen = std::collections::HashSet::new();
            for q in bp.questions {
                assert!(seen.insert(q.id), "duplicate question id {}", q.id);
            }
        }
    }

    #[test]
    fn validate_rejects_out_of_range_answer() {
        let bp = ScoringBlueprint::for_type(AssessmentType::Cirf);
        let mut answers = AnswerMap::new();
        answers.insert("cc-1", AnswerValue::Likert(9));

        let err = bp.validate_submission(&answers).unwrap_err();
        assert!(matches!(
            err,
            SubmissionValidationError::ValueOutOfRange { ref question, value: 9 } if question == "cc-1"
        ));
    }

    #[test]
    fn validate_requires_half_of_scored_questions() {
        let bp = ScoringBlueprint::for_type(AssessmentType::Cirf);
        let mut answers = AnswerMap::new();
        for q in bp.questions.iter().take(10) {
            answers.insert(q.id, AnswerValue::Likert(4));
        }

        let err = bp.validate_submission(&answers).unwrap_err();
        assert!(matches!(
            err,
            SubmissionValidationError::TooFewAnswers { required: 17, answered: 10 }
        ));
    }

    #[test]
    fn validate_accepts_complete_submission() {
        let bp = ScoringBlueprint::for_type(AssessmentType::Pricing);
        let mut answers = AnswerMap::new();
        for q in bp.questions {
            answers.insert(q.id, AnswerValue::Likert(5));
        }
        assert!(bp.validate_submission(&answers).is_ok());
    }

    #[test]
    fn curated_construct_labels_resolve() {
        assert_eq!(construct_label("financialReserves"), "Financial Resilience");
        assert_eq!(construct_label("adaptiveResponse"), "Adaptive Capacity");
    }

    #[test]
    fn unknown_construct_labels_are_decamelized() {
        assert_eq!(construct_label("knowledgeIntegration"), "Knowledge Integration");
        assert_eq!(construct_label("pricingPower"), "Pricing Power");
    }
}
