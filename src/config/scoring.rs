//! Scoring and recommendation tunables.

use serde::Deserialize;

use super::error::ValidationError;

/// Tunables for recommendation and case study matching.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Normalized construct score below which advice is generated
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: f64,

    /// Maximum recommendations per result
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Case studies attached per recommendation
    #[serde(default = "default_case_studies_per_recommendation")]
    pub case_studies_per_recommendation: usize,

    /// Score distance at which case-study proximity decays to zero
    #[serde(default = "default_proximity_window")]
    pub case_study_proximity_window: f64,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.recommendation_threshold > 0.0 && self.recommendation_threshold <= 1.0) {
            return Err(ValidationError::InvalidRecommendationThreshold);
        }
        if self.case_study_proximity_window <= 0.0 {
            return Err(ValidationError::InvalidProximityWindow);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            recommendation_threshold: default_recommendation_threshold(),
            max_recommendations: default_max_recommendations(),
            case_studies_per_recommendation: default_case_studies_per_recommendation(),
            case_study_proximity_window: default_proximity_window(),
        }
    }
}

fn default_recommendation_threshold() -> f64 {
    0.7
}

fn default_max_recommendations() -> usize {
    5
}

fn default_case_studies_per_recommendation() -> usize {
    2
}

fn default_proximity_window() -> f64 {
    25.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_configuration() {
        let config = ScoringConfig::default();
        assert!((config.recommendation_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_recommendations, 5);
        assert!((config.case_study_proximity_window - 25.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let config = ScoringConfig {
            recommendation_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            recommendation_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let config = ScoringConfig {
            case_study_proximity_window: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
