//! Interpretation bands - qualitative classification of an overall score.

use serde::{Deserialize, Serialize};

/// The four qualitative bands an overall score can land in.
///
/// Bands are closed on the lower bound and open on the upper, except
/// Thriving which includes 100, so the mapping is total over [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interpretation {
    Emerging,
    Developing,
    Established,
    Thriving,
}

impl Interpretation {
    /// Classifies an overall score (0-100) into its band.
    ///
    /// Out-of-range input is clamped, keeping the function total.
    pub fn classify(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        if score >= 80.0 {
            Interpretation::Thriving
        } else if score >= 60.0 {
            Interpretation::Established
        } else if score >= 40.0 {
            Interpretation::Developing
        } else {
            Interpretation::Emerging
        }
    }

    /// Display label for the band.
    pub fn level(&self) -> &'static str {
        match self {
            Interpretation::Emerging => "Emerging",
            Interpretation::Developing => "Developing",
            Interpretation::Established => "Established",
            Interpretation::Thriving => "Thriving",
        }
    }

    /// One-sentence qualitative description.
    pub fn description(&self) -> &'static str {
        match self {
            Interpretation::Emerging => {
                "Early stage with foundational work needed."
            }
            Interpretation::Developing => {
                "Good progress with significant growth opportunities."
            }
            Interpretation::Established => {
                "Solid performance with some areas for improvement."
            }
            Interpretation::Thriving => {
                "Excellent performance with strong foundations across all dimensions."
            }
        }
    }

    /// Design-system color token used by the results UI.
    pub fn color(&self) -> &'static str {
        match self {
            Interpretation::Emerging => "terracotta",
            Interpretation::Developing => "gold",
            Interpretation::Established => "ocean",
            Interpretation::Thriving => "sage",
        }
    }
}
