//! Conversion between the stores' persisted tag format and `Vec<Tag>`.
//!
//! The mentor and mentee services keep expertise/interest lists in a single
//! text column joined with `;`. Depending on the service version the JSON
//! they return carries either that raw string or an already split array, so
//! the store edge accepts both and everything past it works on lists only.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::domain::Tag;

/// Separator used by the stores' persisted representation
pub const TAG_DELIMITER: char = ';';

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<Tag>),
    Delimited(String),
    Unusable(IgnoredAny),
}

/// Split a persisted tag string into its tags.
///
/// Empty segments are dropped; tags are otherwise kept byte-for-byte
/// (no trimming, no case folding).
pub fn split_tags(raw: &str) -> Vec<Tag> {
    raw.split(TAG_DELIMITER)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serde adapter for tag list fields: accepts an array, a delimited string or null.
///
/// Any other value reads as an empty list so the record itself still parses;
/// callers that need tags reject the empty list.
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTags>::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawTags::List(tags)) => tags,
        Some(RawTags::Delimited(joined)) => split_tags(&joined),
        Some(RawTags::Unusable(_)) => {
            tracing::warn!("Tag field is neither a list nor a delimited string, treating it as empty");
            Vec::new()
        }
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_tags")]
        tags: Vec<Tag>,
    }

    fn parse(json: &str) -> Vec<Tag> {
        serde_json::from_str::<Holder>(json).unwrap().tags
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("JavaScript;React"), vec!["JavaScript", "React"]);
        assert!(split_tags("").is_empty());
        assert_eq!(split_tags("Go;;Rust;"), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_split_keeps_case_and_spacing() {
        assert_eq!(split_tags("react; React"), vec!["react", " React"]);
    }

    #[test]
    fn test_deserialize_accepts_both_forms() {
        assert_eq!(parse(r#"{"tags": ["A", "B"]}"#), vec!["A", "B"]);
        assert_eq!(parse(r#"{"tags": "A;B"}"#), vec!["A", "B"]);
        assert!(parse(r#"{"tags": null}"#).is_empty());
        assert!(parse(r#"{}"#).is_empty());
    }

    #[test]
    fn test_deserialize_unusable_values_as_empty() {
        assert!(parse(r#"{"tags": 42}"#).is_empty());
        assert!(parse(r#"{"tags": {"first": "Go"}}"#).is_empty());
        assert!(parse(r#"{"tags": [1, 2]}"#).is_empty());
    }
}
