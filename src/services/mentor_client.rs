use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::models::Mentor;
use crate::services::store::{endpoint, read_json, MentorStore, StoreError};

/// HTTP client for the mentor service
///
/// Consumes:
/// - `GET /mentors` -> array of mentors
/// - `GET /mentors/{id}` -> mentor or 404
pub struct MentorServiceClient {
    base_url: String,
    client: Client,
}

impl MentorServiceClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MentorStore for MentorServiceClient {
    async fn list_mentors(&self) -> Result<Vec<Mentor>, StoreError> {
        let url = endpoint(&self.base_url, "mentors");

        tracing::debug!("Fetching mentors from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to fetch mentors: {} - {}", status, body);
            return Err(StoreError::ApiError { status, body });
        }

        let mentors: Vec<Mentor> = read_json(response, "mentors").await?;

        tracing::debug!("Fetched {} mentors", mentors.len());

        Ok(mentors)
    }

    async fn get_mentor(&self, id: i64) -> Result<Option<Mentor>, StoreError> {
        let url = endpoint(&self.base_url, &format!("mentors/{}", id));

        tracing::debug!("Fetching mentor {}", id);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to fetch mentor {}: {} - {}", id, status, body);
            return Err(StoreError::ApiError { status, body });
        }

        // The store answers `null` for some missing rows instead of a 404
        // The store answers `null` for some missing rows instead of a 404
        read_json::<Option<Mentor>>(response, "mentor").await
    }
}
