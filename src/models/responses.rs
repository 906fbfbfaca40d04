use serde::{Deserialize, Serialize};

use crate::models::domain::{AssignmentStatus, MatchResult, Mentee, Mentor};

/// Response for `POST /match`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub mentee: Mentee,
    pub matches: Vec<MatchResult>,
}

/// Response for `POST /match/interest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestMatchResponse {
    pub matches: Vec<MatchResult>,
}

/// Response for `POST /assign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignResponse {
    pub message: String,
    #[serde(rename = "menteeId")]
    pub mentee_id: i64,
    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
}

/// Response for `GET /mentee-matches/{menteeId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentStatusResponse {
    pub mentee: Mentee,
    #[serde(rename = "assignedMentor")]
    pub assigned_mentor: Option<Mentor>,
    pub status: AssignmentStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
