//! In-memory stores for tests and local runs without the backing services.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{Mentee, Mentor};
use crate::services::store::{MenteeStore, MentorStore, StoreError};

fn unavailable() -> StoreError {
    StoreError::ApiError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: "store unavailable".to_string(),
    }
}

/// Mentor store backed by a vector, preserving insertion order
#[derive(Default)]
pub struct InMemoryMentorStore {
    mentors: Mutex<Vec<Mentor>>,
    list_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryMentorStore {
    pub fn new(mentors: Vec<Mentor>) -> Self {
        Self {
            mentors: Mutex::new(mentors),
            ..Default::default()
        }
    }

    pub fn remove(&self, id: i64) {
        if let Ok(mut mentors) = self.mentors.lock() {
            mentors.retain(|m| m.id != id);
        }
    }

    /// Make every subsequent call fail as if the service were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `list_mentors` calls served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Result<Vec<Mentor>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.mentors
            .lock()
            .map(|mentors| mentors.clone())
            .map_err(|_| StoreError::InvalidResponse("mentor store lock poisoned".to_string()))
    }
}

#[async_trait]
impl MentorStore for InMemoryMentorStore {
    async fn list_mentors(&self) -> Result<Vec<Mentor>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot()
    }

    async fn get_mentor(&self, id: i64) -> Result<Option<Mentor>, StoreError> {
        Ok(self.snapshot()?.into_iter().find(|m| m.id == id))
    }
}

/// Mentee store backed by a vector
#[derive(Default)]
pub struct InMemoryMenteeStore {
    mentees: Mutex<Vec<Mentee>>,
    update_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryMenteeStore {
    pub fn new(mentees: Vec<Mentee>) -> Self {
        Self {
            mentees: Mutex::new(mentees),
            ..Default::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `assign_mentor` calls received so far
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl MenteeStore for InMemoryMenteeStore {
    async fn get_mentee(&self, id: i64) -> Result<Option<Mentee>, StoreError> {
        self.check_available()?;
        let mentees = self
            .mentees
            .lock()
            .map_err(|_| StoreError::InvalidResponse("mentee store lock poisoned".to_string()))?;
        Ok(mentees.iter().find(|m| m.id == id).cloned())
    }

    async fn assign_mentor(&self, mentee_id: i64, mentor_id: i64) -> Result<Mentee, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut mentees = self
            .mentees
            .lock()
            .map_err(|_| StoreError::InvalidResponse("mentee store lock poisoned".to_string()))?;

        let mentee = mentees
            .iter_mut()
            .find(|m| m.id == mentee_id)
            .ok_or_else(|| StoreError::NotFound(format!("Mentee {} not found", mentee_id)))?;

        mentee.assigned_mentor_id = Some(mentor_id);
        Ok(mentee.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mentor_store_preserves_order() {
        let store = InMemoryMentorStore::new(vec![
            Mentor::new(3, "C", vec![]),
            Mentor::new(1, "A", vec![]),
        ]);

        let ids: Vec<i64> = store.list_mentors().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(store.list_calls(), 1);

        store.remove(3);
        assert!(store.get_mentor(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mentee_store_assigns() {
        let store = InMemoryMenteeStore::new(vec![Mentee::new(1, "A", "a@example.com", vec![])]);

        let updated = store.assign_mentor(1, 9).await.unwrap();
        assert_eq!(updated.assigned_mentor_id, Some(9));

        assert!(matches!(
            store.assign_mentor(2, 9).await,
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.update_calls(), 2);
    }

    #[test]
    fn test_unavailable_store_fails() {
        let store = InMemoryMentorStore::new(vec![]);
        store.set_unavailable(true);
        assert!(tokio_test::block_on(store.list_mentors()).is_err());
    }
}
