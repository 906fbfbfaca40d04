use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::models::Mentee;
use crate::services::store::{endpoint, read_json, MenteeStore, StoreError};

/// HTTP client for the mentee service
///
/// Consumes:
/// - `GET /mentees/{id}` -> mentee or 404
/// - `PUT /mentees/{id}` with `{"mentorId": ..}` -> updated mentee
pub struct MenteeServiceClient {
    base_url: String,
    client: Client,
}

impl MenteeServiceClient {
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

/// The update endpoint answers either the bare mentee or
/// `{"message": .., "mentee": {..}}`.
fn unwrap_mentee(body: Value) -> Result<Mentee, StoreError> {
    let data = match body {
        Value::Object(mut obj) if obj.get("mentee").map_or(false, Value::is_object) => {
            obj.remove("mentee").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(data)
        .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse mentee: {}", e)))
}

#[async_trait]
impl MenteeStore for MenteeServiceClient {
    async fn get_mentee(&self, id: i64) -> Result<Option<Mentee>, StoreError> {
        let url = endpoint(&self.base_url, &format!("mentees/{}", id));

        tracing::debug!("Fetching mentee {}", id);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to fetch mentee {}: {} - {}", id, status, body);
            return Err(StoreError::ApiError { status, body });
        }

        read_json::<Option<Mentee>>(response, "mentee").await
    }

    async fn assign_mentor(&self, mentee_id: i64, mentor_id: i64) -> Result<Mentee, StoreError> {
        let url = endpoint(&self.base_url, &format!("mentees/{}", mentee_id));

        let response = self
            .client
            .put(&url)
            .json(&json!({ "mentorId": mentor_id }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("Mentee {} not found", mentee_id)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "Failed to assign mentor {} to mentee {}: {} - {}",
                mentor_id,
                mentee_id,
                status,
                body
            );
            return Err(StoreError::ApiError { status, body });
        }

        let body: Value = read_json(response, "assignment reply").await?;

        tracing::debug!("Assigned mentor {} to mentee {}", mentor_id, mentee_id);

        unwrap_mentee(body)
    }
}
