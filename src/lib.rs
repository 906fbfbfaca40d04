//! Mentor Match - pairs mentees with mentors by interest overlap
//!
//! The match engine pulls mentor and mentee records from their own services,
//! ranks mentors by how much of a mentee's interest list their expertise
//! covers, and records mentor assignments back on the mentee.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank_mentors, MatchEngine};
pub use error::MatchError;
pub use models::{AssignmentStatus, MatchResult, Mentee, Mentor, Tag};
pub use services::{MenteeStore, MentorStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let ranked = rank_mentors(
            &["Rust".to_string()],
            vec![Mentor::new(1, "Ferris", vec!["Rust".to_string()])],
        );
        assert_eq!(ranked[0].match_score, 100.0);
    }
}
