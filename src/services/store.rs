use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Mentee, Mentor};

/// Errors that can occur when talking to the mentor or mentee store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read access to mentor records
#[async_trait]
pub trait MentorStore: Send + Sync {
    /// All mentors, in the order the store returns them
    async fn list_mentors(&self) -> Result<Vec<Mentor>, StoreError>;

    /// A single mentor; `Ok(None)` when the store reports it missing
    async fn get_mentor(&self, id: i64) -> Result<Option<Mentor>, StoreError>;
}

/// Read and assignment access to mentee records
#[async_trait]
pub trait MenteeStore: Send + Sync {
    /// A single mentee; `Ok(None)` when the store reports it missing
    async fn get_mentee(&self, id: i64) -> Result<Option<Mentee>, StoreError>;

    /// Record `mentor_id` as the mentee's assigned mentor.
    ///
    /// Fails with [`StoreError::NotFound`] when the mentee does not exist.
    async fn assign_mentor(&self, mentee_id: i64, mentor_id: i64) -> Result<Mentee, StoreError>;
}

/// Build the HTTP client shared by the store clients
pub fn build_http_client(timeout: Duration) -> Result<Client, StoreError> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(5)))
        .build()?;

    Ok(client)
}

/// Decode a JSON body, keeping serde's reason in the error
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, StoreError> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

/// Join a base URL and a path without doubling the slash
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
