use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by the match engine and its HTTP handlers
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store request failed: {0}")]
    Upstream(#[from] StoreError),
}

impl MatchError {
    fn label(&self) -> &'static str {
        match self {
            MatchError::InvalidInput(_) => "invalid_input",
            MatchError::NotFound(_) => "not_found",
            MatchError::Upstream(_) => "upstream_failure",
        }
    }
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::InvalidInput(errors.to_string())
    }
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MatchError::NotFound(_) => StatusCode::NOT_FOUND,
            MatchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (message, details) = match self {
            MatchError::Upstream(source) => {
                ("Failed to reach a backing store".to_string(), Some(source.to_string()))
            }
            other => (other.to_string(), None),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.label().to_string(),
            message,
            status_code: status.as_u16(),
            details,
        })
    }
}

/// JSON error for requests actix rejects before they reach a handler
#[derive(Debug, Error)]
#[error("{error}: {message}")]
pub struct RequestError {
    pub error: &'static str,
    pub message: String,
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: self.error.to_string(),
            message: self.message.clone(),
            status_code: 400,
            details: None,
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    RequestError {
        error: "invalid_json",
        message: format!("Invalid JSON: {}", err),
    }
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    RequestError {
        error: "invalid_path",
        message: format!("Invalid path parameter: {}", err),
    }
    .into()
}
