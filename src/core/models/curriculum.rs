//! Curriculum payload model
//!
//! The backend serves `{ "curriculumTable": { subject: { dayId: DaySpec } } }`.
//! Parsing is strict about the envelope (a missing table is a named error) and
//! lenient inside it: absent labels become empty strings and subtopics keep
//! absent `title`/`tag` as `None` so grouping can skip them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning a curriculum payload into a [`CurriculumTable`]
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// The payload file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but carries no `curriculumTable`
    #[error("Payload has no curriculumTable")]
    MissingCurriculumTable,

    /// The table exists but does not have the subject → day → spec shape
    #[error("Malformed curriculum table: {0}")]
    InvalidShape(String),
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// One subtopic of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtopicSpec {
    /// Subtopic title; `None` when absent or blank
    #[serde(default, deserialize_with = "non_empty_string")]
    pub title: Option<String>,

    /// Raw tag string, normally `Day-<n>:<k>`; `None` when absent or blank
    #[serde(default, deserialize_with = "non_empty_string")]
    pub tag: Option<String>,

    /// Whether the subtopic's content has been authored/verified
    #[serde(default, deserialize_with = "bool_or_false")]
    pub status: bool,
}

impl SubtopicSpec {
    /// Create a subtopic with both title and tag present
    #[must_use]
    pub fn new(title: &str, tag: &str, status: bool) -> Self {
        Self {
            title: Some(title.to_string()),
            tag: Some(tag.to_string()),
            status,
        }
    }

    /// Title and tag, when both are present
    #[must_use]
    pub fn addressable(&self) -> Option<(&str, &str)> {
        Some((self.title.as_deref()?, self.tag.as_deref()?))
    }
}

/// Topic label and ordered subtopics for one backend day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpec {
    /// Topic label
    #[serde(rename = "Topics", default, deserialize_with = "string_or_empty")]
    pub topics: String,

    /// Subtopics in authored order
    #[serde(rename = "SubTopics", default)]
    pub sub_topics: Vec<SubtopicSpec>,
}

impl DaySpec {
    /// Create a day spec
    #[must_use]
    pub fn new(topics: &str, sub_topics: Vec<SubtopicSpec>) -> Self {
        Self {
            topics: topics.to_string(),
            sub_topics,
        }
    }
}

/// Subject → backend day id → [`DaySpec`]
///
/// Day ids are opaque backend identifiers; display order is derived from tags by
/// the sequencer, not from these keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumTable {
    subjects: BTreeMap<String, BTreeMap<String, DaySpec>>,
}

impl CurriculumTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a full backend payload (`{"curriculumTable": {...}}`)
    ///
    /// # Errors
    /// - [`CurriculumError::Json`] if the text is not JSON
    /// - [`CurriculumError::MissingCurriculumTable`] if the envelope has no (or a null) table
    /// - [`CurriculumError::InvalidShape`] if the envelope or table has the wrong shape
    pub fn from_payload_str(json: &str) -> Result<Self, CurriculumError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_payload_value(value)
    }

    /// Parse an already-decoded backend payload
    ///
    /// # Errors
    /// See [`from_payload_str`](Self::from_payload_str).
    pub fn from_payload_value(value: serde_json::Value) -> Result<Self, CurriculumError> {
        let serde_json::Value::Object(mut envelope) = value else {
            return Err(CurriculumError::InvalidShape(
                "payload is not a JSON object".to_string(),
            ));
        };
        let table = match envelope.remove("curriculumTable") {
            None | Some(serde_json::Value::Null) => {
                return Err(CurriculumError::MissingCurriculumTable)
            }
            Some(table) => table,
        };
        serde_json::from_value(table).map_err(|e| CurriculumError::InvalidShape(e.to_string()))
    }

    /// Read and parse a payload file
    ///
    /// # Errors
    /// Returns [`CurriculumError::Io`] if the file cannot be read, otherwise see
    /// [`from_payload_str`](Self::from_payload_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CurriculumError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_payload_str(&content)
    }

    /// Add or replace one day of a subject
    pub fn insert_day(&mut self, subject: &str, day_id: &str, spec: DaySpec) {
        self.subjects
            .entry(subject.to_string())
            .or_default()
            .insert(day_id.to_string(), spec);
    }

    /// Subject names in sorted order
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Days of `subject` keyed by backend day id; `None` if the subject is unknown
    #[must_use]
    pub fn days(&self, subject: &str) -> Option<&BTreeMap<String, DaySpec>> {
        self.subjects.get(subject)
    }

    /// Whether the table has no subjects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let json = r#"{"curriculumTable": {"math": {"d1": {
            "Topics": "Algebra",
            "SubTopics": [{"title": "A", "tag": "Day-1:1", "status": true}]
        }}}}"#;

        let table = CurriculumTable::from_payload_str(json).unwrap();
        let days = table.days("math").unwrap();
        assert_eq!(days["d1"].topics, "Algebra");
        assert_eq!(days["d1"].sub_topics, vec![SubtopicSpec::new("A", "Day-1:1", true)]);
    }

    #[test]
    fn test_missing_table_is_named_error() {
        let err = CurriculumTable::from_payload_str(r#"{"message": "ok"}"#).unwrap_err();
        assert!(matches!(err, CurriculumError::MissingCurriculumTable));

        let err = CurriculumTable::from_payload_str(r#"{"curriculumTable": null}"#).unwrap_err();
        assert!(matches!(err, CurriculumError::MissingCurriculumTable));
    }

    #[test]
    fn test_non_object_payload_is_invalid_shape() {
        let err = CurriculumTable::from_payload_str("[1, 2]").unwrap_err();
        assert!(matches!(err, CurriculumError::InvalidShape(_)));
    }

    #[test]
    fn test_day_that_is_not_an_object_is_invalid_shape() {
        let err =
            CurriculumTable::from_payload_str(r#"{"curriculumTable": {"math": {"d1": 3}}}"#)
                .unwrap_err();
        assert!(matches!(err, CurriculumError::InvalidShape(_)));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let err = CurriculumTable::from_payload_str("{not json").unwrap_err();
        assert!(matches!(err, CurriculumError::Json(_)));
    }

    #[test]
    fn test_lenient_inner_fields() {
        let json = r#"{"curriculumTable": {"math": {"d1": {
            "Topics": null,
            "SubTopics": [{"title": "", "tag": null}, {"tag": "Day-1:2"}]
        }, "d2": {}}}}"#;

        let table = CurriculumTable::from_payload_str(json).unwrap();
        let days = table.days("math").unwrap();
        assert_eq!(days["d1"].topics, "");
        assert_eq!(days["d1"].sub_topics[0].title, None);
        assert_eq!(days["d1"].sub_topics[0].tag, None);
        assert!(!days["d1"].sub_topics[0].status);
        assert_eq!(days["d1"].sub_topics[1].addressable(), None);
        assert!(days["d2"].sub_topics.is_empty());
    }

    #[test]
    fn test_empty_table_parses() {
        let table = CurriculumTable::from_payload_str(r#"{"curriculumTable": {}}"#).unwrap();
        assert!(table.is_empty());
        assert!(table.days("math").is_none());
    }
}
