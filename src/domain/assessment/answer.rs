//! Answer value objects for a respondent's in-progress or submitted survey.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single answer value as submitted by a respondent.
///
/// Likert answers arrive as JSON numbers; categorical and free-text
/// answers as strings; multi-select answers as string arrays. The
/// question's kind in the blueprint decides how a value is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Likert(i64),
    Text(String),
    MultiSelect(Vec<String>),
}

impl AnswerValue {
    /// Returns the value as a valid Likert response (1-7), if it is one.
    ///
    /// Out-of-range numbers return `None`; such answers are excluded from
    /// scoring rather than clamped.
    pub fn as_likert(&self) -> Option<u8> {
        match self {
            AnswerValue::Likert(v) if (1..=7).contains(v) => Some(*v as u8),
            _ => None,
        }
    }

    /// Returns the value as a category code, if it is a string.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the raw numeric value for range validation, if numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            AnswerValue::Likert(v) => Some(*v),
            _ => None,
        }
    }
}

/// The full answer map for one assessment session.
///
/// Null answers are dropped at deserialization time: an unanswered
/// question is simply absent, never present-but-invalid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(HashMap<String, AnswerValue>);

impl AnswerMap {
    /// Creates an empty answer map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an answer, replacing any previous value for the question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(question_id.into(), value);
    }

    /// Returns the raw answer for a question, if present.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Returns the valid Likert value for a question, if answered with one.
    pub fn likert(&self, question_id: &str) -> Option<u8> {
        self.get(question_id).and_then(AnswerValue::as_likert)
    }

    /// Returns the category code for a question, if answered with one.
    pub fn category(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_category)
    }

    /// Number of answers present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts how many of the given question ids carry a valid Likert answer.
    pub fn answered_likert_count<'a>(
        &self,
        question_ids: impl IntoIterator<Item = &'a str>,
    ) -> usize {
        question_ids
            .into_iter()
            .filter(|id| self.likert(id).is_some())
            .count()
    }

    /// Iterates over (question id, answer) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for AnswerMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = HashMap::<String, Option<AnswerValue>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likert_in_range_is_accepted() {
        for v in 1..=7 {
            assert_eq!(AnswerValue::Likert(v).as_likert(), Some(v as u8));
        }
    }

    #[test]
    fn likert_out_of_range_is_rejected() {
        assert_eq!(AnswerValue::Likert(0).as_likert(), None);
        assert_eq!(AnswerValue::Likert(8).as_likert(), None);
        assert_eq!(AnswerValue::Likert(-3).as_likert(), None);
    }

    #[test]
    fn text_answers_are_not_likert() {
        assert_eq!(AnswerValue::Text("4".into()).as_likert(), None);
    }

    #[test]
    fn null_answers_are_dropped_on_deserialize() {
        let map: AnswerMap =
            serde_json::from_str(r#"{"cc-1": 5, "cc-2": null, "demo-region": "europe"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.likert("cc-1"), Some(5));
        assert_eq!(map.get("cc-2"), None);
        assert_eq!(map.category("demo-region"), Some("europe"));
    }

    #[test]
    fn multi_select_deserializes_from_array() {
        let map: AnswerMap = serde_json::from_str(r#"{"q": ["a", "b"]}"#).unwrap();
        assert_eq!(
            map.get("q"),
            Some(&AnswerValue::MultiSelect(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn answered_likert_count_skips_invalid_values() {
        let mut map = AnswerMap::new();
        map.insert("a", AnswerValue::Likert(4));
        map.insert("b", AnswerValue::Likert(12));
        map.insert("c", AnswerValue::Text("hello".into()));

        assert_eq!(map.answered_likert_count(["a", "b", "c", "d"]), 1);
    }
}
