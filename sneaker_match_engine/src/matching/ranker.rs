use std::cmp::Ordering;

use crate::matching::MatchCandidate;

/// The number of candidates that are kept, persisted and notified per matching run.
pub const TOP_N: usize = 5;

/// Orders candidates by match score (highest first), then by credibility (highest first), and keeps the best
/// [`TOP_N`]. The sort is stable, so any remaining ties keep their input order.
pub fn rank(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(TOP_N);
    candidates
}

fn compare_candidates(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.match_score
        .total_cmp(&a.match_score)
        .then_with(|| b.ranking_credibility().cmp(&a.ranking_credibility()))
}
