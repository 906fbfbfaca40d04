use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::domain::Tag;

/// Request to rank mentors for a stored mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(
        required(message = "menteeId is required"),
        range(min = 1, message = "menteeId must be a positive integer")
    )]
    #[serde(rename = "menteeId", alias = "mentee_id", default, deserialize_with = "lenient_id")]
    pub mentee_id: Option<i64>,
}

/// Request to rank mentors for an ad-hoc interest list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InterestMatchRequest {
    #[validate(
        required(message = "interest is required"),
        length(min = 1, message = "interest must be a non-empty array")
    )]
    #[serde(default)]
    pub interest: Option<Vec<Tag>>,
}

/// Request to assign a mentor to a mentee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignRequest {
    #[validate(
        required(message = "menteeId is required"),
        range(min = 1, message = "menteeId must be a positive integer")
    )]
    #[serde(rename = "menteeId", alias = "mentee_id", default, deserialize_with = "lenient_id")]
    pub mentee_id: Option<i64>,
    #[validate(
        required(message = "mentorId is required"),
        range(min = 1, message = "mentorId must be a positive integer")
    )]
    #[serde(rename = "mentorId", alias = "mentor_id", default, deserialize_with = "lenient_id")]
    pub mentor_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Ids arrive as JSON numbers or as numeric strings (form inputs, path fragments).
/// A blank string counts as absent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text)))
        }
    }
}
