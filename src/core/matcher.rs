use crate::core::scoring::{calculate_match_score, distinct_tags, matched_expertise};
use crate::models::{MatchResult, Mentor, Tag};

/// Score every mentor against `interest` and rank the ones that overlap.
///
/// Mentors sharing no tag with the interest list are dropped rather than
/// scored zero. The result is ordered by descending score; the sort is
/// stable, so mentors with equal scores keep the order they were fetched in.
pub fn rank_mentors(interest: &[Tag], mentors: Vec<Mentor>) -> Vec<MatchResult> {
    let interest = distinct_tags(interest);

    let mut matches: Vec<MatchResult> = mentors
        .into_iter()
        .filter_map(|mentor| {
            let matched = matched_expertise(&interest, &mentor);
            if matched.is_empty() {
                return None;
            }

            Some(MatchResult {
                match_score: calculate_match_score(matched.len(), interest.len()),
                matched_expertise: matched,
                mentor,
            })
        })
        .collect();

    // Vec::sort_by is stable
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<Tag> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn mentor(id: i64, expertise: &[&str]) -> Mentor {
        Mentor::new(id, format!("Mentor {}", id), tags(expertise))
    }

    #[test]
    fn test_rank_basic_scenario() {
        let interest = tags(&["JavaScript", "React"]);
        let mentors = vec![
            mentor(1, &["JavaScript", "Node.js"]),
            mentor(2, &["React", "JavaScript"]),
            mentor(3, &["Java"]),
        ];

        let ranked = rank_mentors(&interest, mentors);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].mentor.id, 2);
        assert_eq!(ranked[0].match_score, 100.0);
        assert_eq!(ranked[0].matched_expertise, vec!["JavaScript", "React"]);
        assert_eq!(ranked[1].mentor.id, 1);
        assert_eq!(ranked[1].match_score, 50.0);
    }

    #[test]
    fn test_non_overlapping_mentors_are_excluded() {
        let interest = tags(&["Rust"]);
        let ranked = rank_mentors(&interest, vec![mentor(1, &["Go"]), mentor(2, &[])]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let interest = tags(&["A", "B"]);
        let mentors = vec![
            mentor(10, &["B"]),
            mentor(11, &["A", "B"]),
            mentor(12, &["A"]),
            mentor(13, &["B", "Z"]),
        ];

        let ids: Vec<i64> = rank_mentors(&interest, mentors)
            .iter()
            .map(|m| m.mentor.id)
            .collect();

        assert_eq!(ids, vec![11, 10, 12, 13]);
    }

    #[test]
    fn test_duplicates_do_not_double_count() {
        let interest = tags(&["A", "A", "B"]);
        let ranked = rank_mentors(&interest, vec![mentor(1, &["A", "A"])]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].match_score, 50.0);
        assert_eq!(ranked[0].matched_expertise, vec!["A"]);
    }

    #[test]
    fn test_empty_interest_yields_nothing() {
        assert!(rank_mentors(&[], vec![mentor(1, &["A"])]).is_empty());
    }
}
