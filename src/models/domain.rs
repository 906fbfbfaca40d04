use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tags::deserialize_tags;

/// Skill or interest label. Compared by exact, case-sensitive string equality.
pub type Tag = String;

/// Mentor record as served by the mentor store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub expertise: Vec<Tag>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Mentor {
    pub fn new(id: i64, name: impl Into<String>, expertise: Vec<Tag>) -> Self {
        Self {
            id,
            name: name.into(),
            expertise,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Mentee record as served by the mentee store
///
/// The store names the assignment column `mentorId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub interest: Vec<Tag>,
    #[serde(rename = "mentorId", alias = "assignedMentorId", default)]
    pub assigned_mentor_id: Option<i64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Mentee {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        interest: Vec<Tag>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            interest,
            assigned_mentor_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn status(&self) -> AssignmentStatus {
        match self.assigned_mentor_id {
            Some(_) => AssignmentStatus::Assigned,
            None => AssignmentStatus::Unassigned,
        }
    }
}

/// A mentor scored against a mentee's interests.
///
/// Serialized with the mentor's own fields inlined next to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub mentor: Mentor,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchedExpertise")]
    pub matched_expertise: Vec<Tag>,
}

/// Outcome of a successful assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub mentee_id: i64,
    pub mentor_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Assigned,
    Unassigned,
}
