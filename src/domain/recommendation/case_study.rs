//! Case study matching - attaching illustrative examples to advice.
//!
//! Each case study is tagged with industries, organization types, a
//! region, and the constructs it demonstrably overcame. The matcher
//! scores the library against a respondent's profile and weakness with
//! an additive weight table, and reports human-readable match reasons
//! for transparency in the results UI.

use serde::Serialize;

use crate::domain::profile::{Demographics, Industry, OrganizationType, Region};

/// A documented cultural enterprise used as an illustrative example.
#[derive(Debug, Clone, Copy)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub country: &'static str,
    pub category: &'static str,
    pub industries: &'static [Industry],
    pub org_types: &'static [OrganizationType],
    pub region: Region,
    /// The enterprise's documented resilience score, 0-100.
    pub overall_score: f64,
    /// Constructs this case demonstrably overcame weakness in.
    pub challenges_overcome: &'static [&'static str],
}

/// Read-only registry of case studies.
#[derive(Debug, Clone, Copy)]
pub struct CaseStudyLibrary {
    studies: &'static [CaseStudy],
}

impl CaseStudyLibrary {
    /// The curated library shipped with the service.
    pub fn builtin() -> Self {
        Self {
            studies: BUILTIN_CASE_STUDIES,
        }
    }

    /// Builds a library over an explicit study set (fixtures in tests).
    pub fn new(studies: &'static [CaseStudy]) -> Self {
        Self { studies }
    }

    /// Looks up a case study by id.
    pub fn get(&self, id: &str) -> Option<&CaseStudy> {
        self.studies.iter().find(|c| c.id == id)
    }

    /// All studies in declaration order.
    pub fn all(&self) -> &[CaseStudy] {
        self.studies
    }
}

/// Additive weights for case study matching.
///
/// The score-proximity component decays linearly to zero over
/// `proximity_window` score points; the window is configuration, not a
/// hidden constant.
#[derive(Debug, Clone, Copy)]
pub struct CaseStudyMatchWeights {
    pub same_industry: f64,
    pub similar_org_type: f64,
    pub same_region: f64,
    pub overcame_challenge: f64,
    pub score_proximity: f64,
    pub proximity_window: f64,
}

impl Default for CaseStudyMatchWeights {
    fn default() -> Self {
        Self {
            same_industry: 30.0,
            similar_org_type: 25.0,
            same_region: 20.0,
            overcame_challenge: 25.0,
            score_proximity: 15.0,
            proximity_window: 25.0,
        }
    }
}

/// A case study resolved against a respondent, with its match score and
/// the reasons it was selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedCaseStudy {
    pub id: String,
    pub title: String,
    pub country: String,
    pub category: String,
    pub match_score: f64,
    pub match_reasons: Vec<String>,
}

/// Scores case studies against a profile and construct weakness.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseStudyMatcher {
    weights: CaseStudyMatchWeights,
}

impl CaseStudyMatcher {
    /// Creates a matcher with custom weights.
    pub fn with_weights(weights: CaseStudyMatchWeights) -> Self {
        Self { weights }
    }

    /// Scores one case study; returns the total and the matched reasons.
    fn score(
        &self,
        case: &CaseStudy,
        demographics: &Demographics,
        weak_construct: &str,
        overall_score: f64,
    ) -> (f64, Vec<String>) {
        let w = &self.weights;
        let mut total = 0.0;
        let mut reasons = Vec::new();

        if case.industries.contains(&demographics.industry) {
            total += w.same_industry;
            reasons.push("same industry".to_string());
        }
        if case.org_types.contains(&demographics.org_type) {
            total += w.similar_org_type;
            reasons.push("similar organization type".to_string());
        }
        if case.region == demographics.region {
            total += w.same_region;
            reasons.push("same region".to_string());
        }
        if case.challenges_overcome.contains(&weak_construct) {
            total += w.overcame_challenge;
            reasons.push(format!(
                "overcame a similar {} challenge",
                crate::domain::assessment::construct_label(weak_construct).to_lowercase()
            ));
        }

        let distance = (case.overall_score - overall_score).abs();
        if distance < w.proximity_window {
            let proximity = w.score_proximity * (1.0 - distance / w.proximity_window);
            total += proximity;
            if proximity >= w.score_proximity / 2.0 {
                reasons.push("similar resilience profile".to_string());
            }
        }

        (total, reasons)
    }

    /// Returns the top `k` case studies for one recommendation.
    ///
    /// `candidates` narrows the pool to the variant's curated related
    /// ids when present; an empty slice means the whole library.
    pub fn top_matches(
        &self,
        library: &CaseStudyLibrary,
        demographics: &Demographics,
        weak_construct: &str,
        overall_score: f64,
        candidates: &[&str],
        k: usize,
    ) -> Vec<MatchedCaseStudy> {
        let mut scored: Vec<(f64, usize, &CaseStudy, Vec<String>)> = library
            .all()
            .iter()
            .enumerate()
            .filter(|(_, c)| candidates.is_empty() || candidates.contains(&c.id))
            .map(|(i, c)| {
                let (score, reasons) = self.score(c, demographics, weak_construct, overall_score);
                (score, i, c, reasons)
            })
            .collect();

        // Highest score first; declaration order breaks ties.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1)));

        scored
            .into_iter()
            .take(k)
            .map(|(score, _, c, reasons)| MatchedCaseStudy {
                id: c.id.to_string(),
                title: c.title.to_string(),
                country: c.country.to_string(),
                category: c.category.to_string(),
                match_score: score,
                match_reasons: reasons,
            })
            .collect()
    }
}

static BUILTIN_CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "vietnamese-craft-villages",
        title: "Vietnamese Traditional Craft Villages",
        country: "Vietnam",
        category: "Crafts & Heritage",
        industries: &[Industry::Crafts, Industry::HeritageTourism],
        org_types: &[OrganizationType::Cooperative, OrganizationType::CraftGuild],
        region: Region::AsiaPacific,
        overall_score: 96.0,
        challenges_overcome: &[
            "intergenerationalPlanning",
            "communityOwnership",
            "digitalDistribution",
            "culturalPreservation",
        ],
    },
    CaseStudy {
        id: "nunavut-indigenous-enterprises",
        title: "Nunavut Indigenous Enterprises",
        country: "Canada",
        category: "Indigenous Enterprise",
        industries: &[Industry::Crafts, Industry::MultiSector],
        org_types: &[
            OrganizationType::IndigenousEnterprise,
            OrganizationType::CommunityOrg,
        ],
        region: Region::NorthAmerica,
        overall_score: 96.0,
        challenges_overcome: &[
            "communityDecisionMaking",
            "externalResources",
            "adaptiveResponse",
        ],
    },
    CaseStudy {
        id: "palestinian-tatreez",
        title: "Palestinian Tatreez Embroidery Networks",
        country: "Palestine",
        category: "Crafts & Heritage",
        industries: &[Industry::Crafts, Industry::FashionTextiles],
        org_types: &[OrganizationType::Individual, OrganizationType::Cooperative],
        region: Region::MiddleEast,
        overall_score: 96.0,
        challenges_overcome: &[
            "adaptiveResponse",
            "traditionalKnowledge",
            "financialReserves",
            "culturalAuthenticity",
        ],
    },
    CaseStudy {
        id: "korean-hanji",
        title: "Korean Hanji Paper Revival",
        country: "South Korea",
        category: "Crafts & Heritage",
        industries: &[Industry::Crafts, Industry::Design],
        org_types: &[OrganizationType::Individual, OrganizationType::ForProfit],
        region: Region::AsiaPacific,
        overall_score: 96.0,
        challenges_overcome: &[
            "productDevelopment",
            "digitalDistribution",
            "practitionerAccess",
            "intergenerationalPlanning",
        ],
    },
    CaseStudy {
        id: "mikmaq-clearwater",
        title: "Mi'kmaq First Nations Clearwater Acquisition",
        country: "Canada",
        category: "Indigenous Enterprise",
        industries: &[Industry::FoodBeverage, Industry::MultiSector],
        org_types: &[
            OrganizationType::IndigenousEnterprise,
            OrganizationType::CommunityOrg,
        ],
        region: Region::NorthAmerica,
        overall_score: 88.0,
        challenges_overcome: &[
            "communityOwnership",
            "benefitDistribution",
            "communityDecisionMaking",
        ],
    },
    CaseStudy {
        id: "bangladeshi-nakshi-kantha",
        title: "Bangladeshi Nakshi Kantha Cooperatives",
        country: "Bangladesh",
        category: "Crafts & Heritage",
        industries: &[Industry::Crafts, Industry::FashionTextiles],
        org_types: &[OrganizationType::Cooperative, OrganizationType::CommunityOrg],
        region: Region::AsiaPacific,
        overall_score: 88.0,
        challenges_overcome: &[
            "financialReserves",
            "productDevelopment",
            "culturalAuthenticity",
            "jobCreation",
        ],
    },
    CaseStudy {
        id: "moroccan-fes-pottery",
        title: "Moroccan Fes Pottery Cooperatives",
        country: "Morocco",
        category: "Crafts & Heritage",
        industries: &[Industry::Crafts, Industry::HeritageTourism],
        org_types: &[OrganizationType::Cooperative, OrganizationType::CraftGuild],
        region: Region::MiddleEast,
        overall_score: 88.0,
        challenges_overcome: &[
            "ipProtection",
            "adaptiveResponse",
            "financialReserves",
            "intergenerationalPlanning",
        ],
    },
    CaseStudy {
        id: "jamaican-cultural-industries",
        title: "Jamaican Cultural Industries",
        country: "Jamaica",
        category: "Creative Industries",
        industries: &[Industry::Music, Industry::PerformingArts, Industry::HeritageTourism],
        org_types: &[OrganizationType::ForProfit, OrganizationType::Individual],
        region: Region::LatinAmerica,
        overall_score: 80.0,
        challenges_overcome: &[
            "digitalDistribution",
            "marketExpansion",
            "financialReserves",
        ],
    },
];
