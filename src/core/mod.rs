// Core algorithm exports
pub mod engine;
pub mod matcher;
pub mod scoring;

pub use engine::MatchEngine;
pub use matcher::rank_mentors;
pub use scoring::{calculate_match_score, distinct_tags, matched_expertise};
