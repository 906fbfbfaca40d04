// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod tags;

pub use domain::{Assignment, AssignmentStatus, MatchResult, Mentee, Mentor, Tag};
pub use requests::{AssignRequest, InterestMatchRequest, MatchRequest};
pub use responses::{
    AssignResponse, AssignmentStatusResponse, ErrorResponse, FindMatchesResponse, HealthResponse,
    InterestMatchResponse,
};
