//! Construct scoring engine.
//!
//! Normalizes per-question Likert answers into per-construct, per-section,
//! and overall scores. Pure: output is a function of the answer map and
//! the static blueprint only.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::answer::AnswerMap;
use super::blueprint::ScoringBlueprint;

/// Fraction of a section's questions that must be answered before the
/// section participates in the overall score.
pub const SECTION_COMPLETION_GATE: f64 = 0.5;

/// Errors from the scoring engine.
///
/// Malformed individual answers never fail scoring; they are excluded.
/// The only hard failure is having nothing usable at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no scoreable answers were provided")]
    InsufficientData,
}

/// Score for a section, expressed as a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub id: &'static str,
    pub label: &'static str,
    /// 0-100.
    pub score: f64,
    pub answered: usize,
    pub total: usize,
    /// Whether the section met the completion gate and therefore
    /// participates in the overall score.
    pub complete: bool,
}

/// The complete scoring output for one answer map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentScores {
    /// Overall score, 0-100, weighted mean over complete sections.
    pub overall: f64,
    pub sections: Vec<SectionScore>,
    /// Construct id -> normalized score in [0,1], for every construct
    /// with at least one answered question.
    pub constructs: BTreeMap<&'static str, f64>,
    /// Total scored questions answered with a valid Likert value.
    pub answered: usize,
    /// Total scored questions in the blueprint.
    pub total_questions: usize,
}

impl AssessmentScores {
    /// Returns the normalized score for a construct, if it was answered.
    pub fn construct(&self, id: &str) -> Option<f64> {
        self.constructs.get(id).copied()
    }
}

/// Normalizes a Likert answer from its 1-7 domain to [0,1].
fn normalize_likert(value: u8) -> f64 {
    f64::from(value - 1) / 6.0
}

/// The construct scoring engine.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores an answer map against a blueprint.
    ///
    /// # Edge cases
    /// - Unanswered questions are excluded from both numerator and
    ///   denominator; they are never treated as the neutral midpoint.
    /// - A construct with zero answers is omitted from section
    ///   aggregation rather than scored as zero.
    /// - A section below the completion gate is reported with
    ///   `complete: false` and excluded from the overall mean.
    /// - An answer map with no valid Likert answers at all returns
    ///   `ScoringError::InsufficientData`.
    pub fn score(
        blueprint: &ScoringBlueprint,
        answers: &AnswerMap,
    ) -> Result<AssessmentScores, ScoringError> {
        let mut constructs: BTreeMap<&'static str, f64> = BTreeMap::new();
        let mut sections = Vec::with_capacity(blueprint.sections.len());
        let mut total_answered = 0usize;

        for section in blueprint.sections {
            // Accumulate per-construct weighted sums within this section.
            let mut sums: BTreeMap<&'static str, (f64, f64, usize)> = BTreeMap::new();
            let mut section_answered = 0usize;
            let mut section_total = 0usize;

            for q in blueprint.questions_in_section(section.id) {
                section_total += 1;
                let Some(value) = answers.likert(q.id) else {
                    continue;
                };
                section_answered += 1;
                let entry = sums.entry(q.construct).or_insert((0.0, 0.0, 0));
                entry.0 += normalize_likert(value) * q.weight;
                entry.1 += q.weight;
                entry.2 += 1;
            }

            total_answered += section_answered;

            // Section score: weighted mean of its present construct scores,
            // weighted by each construct's mean discriminatory weight.
            let mut weighted_sum = 0.0;
            let mut weight_total = 0.0;
            for (construct, (sum, weight, answered)) in sums {
                let score = sum / weight;
                let construct_weight = weight / answered as f64;
                constructs.insert(construct, score);
                weighted_sum += score * construct_weight;
                weight_total += construct_weight;
            }

            let score = if weight_total > 0.0 {
                (weighted_sum / weight_total) * 100.0
            } else {
                0.0
            };

            let complete = section_total > 0
                && (section_answered as f64 / section_total as f64) >= SECTION_COMPLETION_GATE;

            sections.push(SectionScore {
                id: section.id,
                label: section.label,
                score,
                answered: section_answered,
                total: section_total,
                complete: complete && section_answered > 0,
            });
        }

        if total_answered == 0 {
            return Err(ScoringError::InsufficientData);
        }

        // Overall: weighted mean over sections that met the gate. If no
        // section met the gate but answers exist, fall back to the
        // answered sections so a sparse preview still gets a number.
        let included: Vec<&SectionScore> = {
            let complete: Vec<&SectionScore> = sections.iter().filter(|s| s.complete).collect();
            if complete.is_empty() {
                sections.iter().filter(|s| s.answered > 0).collect()
            } else {
                complete
            }
        };

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for s in &included {
            let weight = blueprint
                .section(s.id)
                .map(|d| d.weight)
                .unwrap_or_default();
            weighted_sum += s.score * weight;
            weight_total += weight;
        }

        if weight_total <= 0.0 {
            return Err(ScoringError::InsufficientData);
        }

        Ok(AssessmentScores {
            overall: weighted_sum / weight_total,
            sections,
            constructs,
            answered: total_answered,
            total_questions: blueprint.scored_question_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::answer::AnswerValue;
    use crate::domain::assessment::blueprint::{ScoredQuestion, SectionDef};
    use crate::domain::assessment::catalog::AssessmentType;

    /// Single-section, single-construct, seven-question fixture.
    static SEVEN_Q: ScoringBlueprint = ScoringBlueprint {
        ty: AssessmentType::Cirf,
        sections: &[SectionDef {
            id: "core",
            label: "Core",
            weight: 1.0,
        }],
        questions: &[
            ScoredQuestion { id: "q1", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q2", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q3", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q4", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q5", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q6", section: "core", construct: "focus", weight: 1.0 },
            ScoredQuestion { id: "q7", section: "core", construct: "focus", weight: 1.0 },
        ],
        demographic_questions: &[],
    };

    /// Two-section fixture with one construct each, equal weights.
    static TWO_SECTION: ScoringBlueprint = ScoringBlueprint {
        ty: AssessmentType::Cirf,
        sections: &[
            SectionDef { id: "a", label: "A", weight: 0.5 },
            SectionDef { id: "b", label: "B", weight: 0.5 },
        ],
        questions: &[
            ScoredQuestion { id: "a1", section: "a", construct: "alpha", weight: 1.0 },
            ScoredQuestion { id: "a2", section: "a", construct: "alpha", weight: 1.0 },
            ScoredQuestion { id: "b1", section: "b", construct: "beta", weight: 1.0 },
            ScoredQuestion { id: "b2", section: "b", construct: "beta", weight: 1.0 },
        ],
        demographic_questions: &[],
    };

    fn answer_all(blueprint: &ScoringBlueprint, value: i64) -> AnswerMap {
        let mut answers = AnswerMap::new();
        for q in blueprint.questions {
            answers.insert(q.id, AnswerValue::Likert(value));
        }
        answers
    }

    #[test]
    fn midpoint_answers_score_exactly_fifty() {
        // All 4s on a 1-7 scale normalize to 0.5 -> overall 50.
        let scores = ScoringEngine::score(&SEVEN_Q, &answer_all(&SEVEN_Q, 4)).unwrap();

        assert!((scores.construct("focus").unwrap() - 0.5).abs() < 1e-12);
        assert!((scores.overall - 50.0).abs() < 1e-9);
        assert_eq!(scores.answered, 7);
    }

    #[test]
    fn extremes_hit_bounds() {
        let low = ScoringEngine::score(&SEVEN_Q, &answer_all(&SEVEN_Q, 1)).unwrap();
        assert!((low.overall - 0.0).abs() < 1e-9);

        let high = ScoringEngine::score(&SEVEN_Q, &answer_all(&SEVEN_Q, 7)).unwrap();
        assert!((high.overall - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_answers_yield_insufficient_data() {
        let err = ScoringEngine::score(&SEVEN_Q, &AnswerMap::new()).unwrap_err();
        assert_eq!(err, ScoringError::InsufficientData);
    }

    #[test]
    fn non_likert_answers_alone_yield_insufficient_data() {
        let mut answers = AnswerMap::new();
        answers.insert("q1", AnswerValue::Text("strongly agree".into()));
        answers.insert("q2", AnswerValue::Likert(15));

        let err = ScoringEngine::score(&SEVEN_Q, &answers).unwrap_err();
        assert_eq!(err, ScoringError::InsufficientData);
    }

    #[test]
    fn unanswered_questions_do_not_drag_scores_down() {
        // Three of seven answered with 7 -> construct is a clean 1.0,
        // not 3/7 of it.
        let mut answers = AnswerMap::new();
        for id in ["q1", "q2", "q3"] {
            answers.insert(id, AnswerValue::Likert(7));
        }

        let scores = ScoringEngine::score(&SEVEN_Q, &answers).unwrap();
        assert!((scores.construct("focus").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn section_below_gate_is_flagged_incomplete() {
        // Only 3 of 7 answered: below the 50% gate.
        let mut answers = AnswerMap::new();
        for id in ["q1", "q2", "q3"] {
            answers.insert(id, AnswerValue::Likert(6));
        }

        let scores = ScoringEngine::score(&SEVEN_Q, &answers).unwrap();
        assert!(!scores.sections[0].complete);
    }

    #[test]
    fn incomplete_section_is_excluded_from_overall() {
        // Section a fully answered with 7s; section b has one low answer
        // out of two (50% -> complete). Then drop b below the gate and
        // watch the overall rise to section a's score alone.
        let mut answers = AnswerMap::new();
        answers.insert("a1", AnswerValue::Likert(7));
        answers.insert("a2", AnswerValue::Likert(7));

        let scores = ScoringEngine::score(&TWO_SECTION, &answers).unwrap();
        let b = scores.sections.iter().find(|s| s.id == "b").unwrap();
        assert!(!b.complete);
        assert!((scores.overall - 100.0).abs() < 1e-9);
    }

    #[test]
    fn completely_unanswered_section_is_omitted_not_zeroed() {
        let mut answers = AnswerMap::new();
        answers.insert("a1", AnswerValue::Likert(4));
        answers.insert("a2", AnswerValue::Likert(4));

        let scores = ScoringEngine::score(&TWO_SECTION, &answers).unwrap();
        assert!((scores.overall - 50.0).abs() < 1e-9);
        assert!(scores.construct("beta").is_none());
    }

    #[test]
    fn construct_weights_shift_section_scores() {
        static WEIGHTED: ScoringBlueprint = ScoringBlueprint {
            ty: AssessmentType::Cirf,
            sections: &[SectionDef { id: "s", label: "S", weight: 1.0 }],
            questions: &[
                ScoredQuestion { id: "w1", section: "s", construct: "heavy", weight: 2.0 },
                ScoredQuestion { id: "w2", section: "s", construct: "light", weight: 1.0 },
            ],
            demographic_questions: &[],
        };

        let mut answers = AnswerMap::new();
        answers.insert("w1", AnswerValue::Likert(7)); // heavy: 1.0
        answers.insert("w2", AnswerValue::Likert(1)); // light: 0.0

        let scores = ScoringEngine::score(&WEIGHTED, &answers).unwrap();
        // (1.0 * 2 + 0.0 * 1) / 3 = 0.666... -> 66.7
        assert!((scores.sections[0].score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn raising_one_answer_never_lowers_the_construct() {
        let mut answers = answer_all(&SEVEN_Q, 3);
        let before = ScoringEngine::score(&SEVEN_Q, &answers)
            .unwrap()
            .construct("focus")
            .unwrap();

        answers.insert("q4", AnswerValue::Likert(6));
        let after = ScoringEngine::score(&SEVEN_Q, &answers)
            .unwrap()
            .construct("focus")
            .unwrap();

        assert!(after >= before);
    }

    #[test]
    fn scoring_is_deterministic() {
        let answers = answer_all(&TWO_SECTION, 5);
        let first = ScoringEngine::score(&TWO_SECTION, &answers).unwrap();
        let second = ScoringEngine::score(&TWO_SECTION, &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn full_cirf_blueprint_scores_in_bounds() {
        let bp = ScoringBlueprint::for_type(AssessmentType::Cirf);
        let scores = ScoringEngine::score(bp, &answer_all(bp, 6)).unwrap();

        assert!(scores.overall >= 0.0 && scores.overall <= 100.0);
        assert_eq!(scores.constructs.len(), 34);
        for (_, v) in &scores.constructs {
            assert!((0.0..=1.0).contains(v));
        }
    }
}
