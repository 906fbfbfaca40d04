use std::sync::Arc;

use crate::core::matcher::rank_mentors;
use crate::error::MatchError;
use crate::models::{
    Assignment, AssignmentStatusResponse, FindMatchesResponse, MatchResult,
    Mentee, Tag,
};
use crate::services::{MenteeStore, MentorStore, StoreError};

/// Composes mentor and mentee store lookups into match, assign and status operations.
///
/// Holds no mutable state; every call re-fetches what it needs from the stores.
#[derive(Clone)]
pub struct MatchEngine {
    mentors: Arc<dyn MentorStore>,
    mentees: Arc<dyn MenteeStore>,
}

impl MatchEngine {
    pub fn new(mentors: Arc<dyn MentorStore>, mentees: Arc<dyn MenteeStore>) -> Self {
        Self { mentors, mentees }
    }

    /// Rank all mentors against a stored mentee's interests.
    ///
    /// Fails with `NotFound` for an unknown mentee and with `InvalidInput`
    /// when the mentee has no interests; in both cases the mentor store is
    /// never queried.
    pub async fn find_matches(&self, mentee_id: i64) -> Result<FindMatchesResponse, MatchError> {
        let mentee = self.load_mentee(mentee_id).await?;

        if mentee.interest.is_empty() {
            return Err(MatchError::InvalidInput(format!(
                "Mentee {} has no valid interest",
                mentee_id
            )));
        }

        let matches = self.rank(&mentee.interest).await?;

        tracing::info!(
            "Returning {} matches for mentee {} ({} interests)",
            matches.len(),
            mentee_id,
            mentee.interest.len()
        );

        Ok(FindMatchesResponse { mentee, matches })
    }

    /// Rank all mentors against an interest list supplied by the caller
    pub async fn match_interests(&self, interest: &[Tag]) -> Result<Vec<MatchResult>, MatchError> {
        if interest.is_empty() {
            return Err(MatchError::InvalidInput(
                "interest must be a non-empty array".to_string(),
            ));
        }

        self.rank(interest).await
    }

    /// Record `mentor_id` as the mentee's mentor.
    ///
    /// The mentor must exist; nothing is written otherwise. Overlap between
    /// expertise and interest is not checked. A failed write is reported as
    /// is, with no rollback or retry.
    pub async fn assign(&self, mentee_id: i64, mentor_id: i64) -> Result<Assignment, MatchError> {
        if self.mentors.get_mentor(mentor_id).await?.is_none() {
            return Err(MatchError::NotFound(format!("Mentor {} not found", mentor_id)));
        }

        self.mentees
            .assign_mentor(mentee_id, mentor_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => {
                    MatchError::NotFound(format!("Mentee {} not found", mentee_id))
                }
                other => MatchError::Upstream(other),
            })?;

        tracing::info!("Assigned mentor {} to mentee {}", mentor_id, mentee_id);

        Ok(Assignment { mentee_id, mentor_id })
    }

    /// Report whether a mentee has a mentor and, if so, which one.
    ///
    /// An assignment pointing at a mentor the store no longer has is an
    /// inconsistency and fails with `NotFound` instead of reading as unassigned.
    pub async fn get_assignment_status(
        &self,
        mentee_id: i64,
    ) -> Result<AssignmentStatusResponse, MatchError> {
        let mentee = self.load_mentee(mentee_id).await?;

        let assigned_mentor = match mentee.assigned_mentor_id {
            Some(mentor_id) => {
                let mentor = self.mentors.get_mentor(mentor_id).await?.ok_or_else(|| {
                    tracing::warn!(
                        "Mentee {} references mentor {} which no longer exists",
                        mentee_id,
                        mentor_id
                    );
                    MatchError::NotFound(format!("Assigned mentor {} not found", mentor_id))
                })?;
                Some(mentor)
            }
            None => None,
        };

        Ok(AssignmentStatusResponse {
            status: mentee.status(),
            mentee,
            assigned_mentor,
        })
    }

    async fn load_mentee(&self, mentee_id: i64) -> Result<Mentee, MatchError> {
        self.mentees
            .get_mentee(mentee_id)
            .await?
            .ok_or_else(|| MatchError::NotFound(format!("Mentee {} not found", mentee_id)))
    }

    async fn rank(&self, interest: &[Tag]) -> Result<Vec<MatchResult>, MatchError> {
        let mentors = self.mentors.list_mentors().await?;
        let total = mentors.len();
        let matches = rank_mentors(interest, mentors);

        tracing::debug!("{} of {} mentors overlap", matches.len(), total);

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mentor;
    use crate::services::{InMemoryMenteeStore, InMemoryMentorStore};

    fn tags(values: &[&str]) -> Vec<Tag> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn engine(
        mentors: Vec<Mentor>,
        mentees: Vec<Mentee>,
    ) -> (MatchEngine, Arc<InMemoryMentorStore>, Arc<InMemoryMenteeStore>) {
        let mentor_store = Arc::new(InMemoryMentorStore::new(mentors));
        let mentee_store = Arc::new(InMemoryMenteeStore::new(mentees));
        let engine = MatchEngine::new(mentor_store.clone(), mentee_store.clone());
        (engine, mentor_store, mentee_store)
    }

    #[tokio::test]
    async fn test_find_matches_unknown_mentee() {
        let (engine, mentors, _) = engine(vec![], vec![]);
        let err = engine.find_matches(1).await.unwrap_err();
        assert!(matches!(err, MatchError::NotFound(_)));
        assert_eq!(mentors.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_assign_overwrites_previous_assignment() {
        let (engine, _, mentees) = engine(
            vec![Mentor::new(1, "A", vec![]), Mentor::new(2, "B", vec![])],
            vec![Mentee::new(7, "M", "m@example.com", tags(&["Go"]))],
        );

        engine.assign(7, 1).await.unwrap();
        engine.assign(7, 2).await.unwrap();

        let mentee = mentees.get_mentee(7).await.unwrap().unwrap();
        assert_eq!(mentee.assigned_mentor_id, Some(2));
    }

    #[tokio::test]
    async fn test_status_follows_assignment() {
        let (engine, _, _) = engine(
            vec![Mentor::new(4, "D", vec![])],
            vec![Mentee::new(8, "M", "m@example.com", tags(&["Go"]))],
        );

        let report = engine.get_assignment_status(8).await.unwrap();
        assert_eq!(report.status, crate::models::AssignmentStatus::Unassigned);
        assert!(report.assigned_mentor.is_none());

        engine.assign(8, 4).await.unwrap();

        let report = engine.get_assignment_status(8).await.unwrap();
        assert_eq!(report.status, crate::models::AssignmentStatus::Assigned);
        assert_eq!(report.assigned_mentor.map(|m| m.id), Some(4));
    }

    #[tokio::test]
    async fn test_assign_unknown_mentee() {
        let (engine, _, _) = engine(vec![Mentor::new(1, "A", vec![])], vec![]);
        let err = engine.assign(42, 1).await.unwrap_err();
        assert!(matches!(err, MatchError::NotFound(msg) if msg.contains("Mentee 42")));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_swallowed() {
        let (engine, mentors, _) = engine(
            vec![],
            vec![Mentee::new(1, "M", "m@example.com", tags(&["Go"]))],
        );
        mentors.set_unavailable(true);

        let err = engine.find_matches(1).await.unwrap_err();
        assert!(matches!(err, MatchError::Upstream(_)));
    }
}
