use std::collections::HashSet;

use crate::models::{Mentor, Tag};

/// Interest tags with duplicates removed, first occurrence wins.
///
/// Both the numerator and the denominator of the match score are computed
/// over this list so repeated tags never count twice.
pub fn distinct_tags(tags: &[Tag]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.iter()
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Tags of `interest` present in the mentor's expertise, in interest order
pub fn matched_expertise(interest: &[&str], mentor: &Mentor) -> Vec<Tag> {
    let expertise: HashSet<&str> = mentor.expertise.iter().map(String::as_str).collect();

    interest
        .iter()
        .filter(|tag| expertise.contains(*tag))
        .map(|tag| tag.to_string())
        .collect()
}

/// Percentage of interest covered, rounded to two decimals.
///
/// Returns 0.0 when there is no interest to cover.
#[inline]
pub fn calculate_match_score(matched: usize, interest_count: usize) -> f64 {
    if interest_count == 0 {
        return 0.0;
    }

    let raw = matched as f64 / interest_count as f64 * 100.0;
    round_to_cents(raw)
}

#[inline]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
