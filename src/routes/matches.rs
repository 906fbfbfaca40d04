use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::MatchEngine;
use crate::error::MatchError;
use crate::models::{
    AssignRequest, AssignResponse, HealthResponse, InterestMatchRequest, InterestMatchResponse,
    MatchRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches))
        .route("/match/interest", web::post().to(match_interests))
        .route("/assign", web::post().to(assign_mentor))
        .route("/mentee-matches/{mentee_id}", web::get().to(assignment_status));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: "match-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /match
///
/// Request body:
/// ```json
/// { "menteeId": 5 }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;
    let MatchRequest { mentee_id: Some(mentee_id) } = req.into_inner() else {
        return Err(MatchError::InvalidInput("menteeId is required".to_string()));
    };

    tracing::info!("Finding matches for mentee: {}", mentee_id);

    let response = state.engine.find_matches(mentee_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Match an ad-hoc interest list
///
/// POST /match/interest
///
/// Request body:
/// ```json
/// { "interest": ["JavaScript", "React"] }
/// ```
async fn match_interests(
    state: web::Data<AppState>,
    req: web::Json<InterestMatchRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;
    let interest = req.into_inner().interest.unwrap_or_default();

    let matches = state.engine.match_interests(&interest).await?;

    Ok(HttpResponse::Ok().json(InterestMatchResponse { matches }))
}

/// Assign a mentor to a mentee
///
/// POST /assign
///
/// Request body:
/// ```json
/// { "menteeId": 5, "mentorId": 2 }
/// ```
async fn assign_mentor(
    state: web::Data<AppState>,
    req: web::Json<AssignRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;
    let AssignRequest {
        mentee_id: Some(mentee_id),
        mentor_id: Some(mentor_id),
    } = req.into_inner()
    else {
        return Err(MatchError::InvalidInput("menteeId and mentorId are required".to_string()));
    };

    let assignment = state.engine.assign(mentee_id, mentor_id).await?;

    Ok(HttpResponse::Ok().json(AssignResponse {
        message: "Mentor assigned to mentee".to_string(),
        mentee_id: assignment.mentee_id,
        mentor_id: assignment.mentor_id,
    }))
}

/// Current assignment of a mentee
///
/// GET /mentee-matches/{menteeId}
async fn assignment_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, MatchError> {
    let mentee_id = path.into_inner();

    let report = state.engine.get_assignment_status(mentee_id).await?;

    Ok(HttpResponse::Ok().json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn test_health_check_response() {
        let response = health_check().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "match-service");
    }
}
