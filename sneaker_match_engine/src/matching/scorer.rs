use serde::Serialize;

use crate::{
    db_types::{effective_credibility, User, WantEntry},
    matching::calculate_overlap,
};

/// A counterparty that can satisfy at least part of the requester's ask-list. Only lives for one matching run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub counterparty: User,
    /// The requester's entries that this counterparty can fill
    pub overlap: Vec<WantEntry>,
    /// `overlap.len() / ask_list.len()`, always in `(0, 1]`
    pub match_score: f64,
    /// Echoed verbatim from the counterparty record
    pub credibility_score: Option<i64>,
}

impl MatchCandidate {
    pub fn ranking_credibility(&self) -> i64 {
        effective_credibility(self.credibility_score)
    }
}

/// Scores one counterparty against the requester's ask-list.
///
/// Returns `None` when the ask-list is empty or nothing overlaps. Zero-overlap counterparties could never beat a
/// scored one in the ranking, so they are dropped here rather than carried to the ranker.
pub fn score_counterparty(ask_list: &[WantEntry], counterparty: &User, offer_list: &[WantEntry]) -> Option<MatchCandidate> {
    if ask_list.is_empty() {
        return None;
    }
    let overlap = calculate_overlap(ask_list, offer_list);
    if overlap.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let match_score = overlap.len() as f64 / ask_list.len() as f64;
    Some(MatchCandidate {
        counterparty: counterparty.clone(),
        overlap,
        match_score,
        credibility_score: counterparty.credibility_score,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(sku: &str, size: &str) -> WantEntry {
        WantEntry { id: 0, owner_user_id: 0, product_sku: sku.into(), size: size.into(), quantity: 1 }
    }

    fn user(id: i64, credibility_score: Option<i64>) -> User {
        User { id, username: format!("user{id}"), credibility_score }
    }

    #[test]
    fn score_is_fraction_of_ask_list() {
        let ask = vec![entry("SKU001", "M"), entry("SKU002", "L"), entry("SKU003", "XL")];
        let offer = vec![entry("SKU001", "M"), entry("SKU002", "L")];
        let candidate = score_counterparty(&ask, &user(2, Some(80)), &offer).unwrap();
        assert_eq!(candidate.overlap.len(), 2);
        assert!((candidate.match_score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(candidate.credibility_score, Some(80));
    }

    #[test]
    fn full_overlap_scores_one() {
        let ask = vec![entry("SKU001", "M"), entry("SKU002", "L")];
        let candidate = score_counterparty(&ask, &user(2, None), &ask).unwrap();
        assert_eq!(candidate.match_score, 1.0);
        assert_eq!(candidate.credibility_score, None);
        assert_eq!(candidate.ranking_credibility(), 0);
    }

    #[test]
    fn score_stays_in_bounds() {
        let ask = (0..7).map(|i| entry(&format!("SKU{i:03}"), "M")).collect::<Vec<_>>();
        for k in 1..=ask.len() {
            let offer = ask[..k].to_vec();
            let candidate = score_counterparty(&ask, &user(2, Some(1)), &offer).unwrap();
            assert!(candidate.match_score > 0.0 && candidate.match_score <= 1.0);
        }
    }

    #[test]
    fn nothing_to_score() {
        let ask = vec![entry("SKU001", "M")];
        assert!(score_counterparty(&[], &user(2, Some(5)), &ask).is_none());
        assert!(score_counterparty(&ask, &user(2, Some(5)), &[]).is_none());
        assert!(score_counterparty(&ask, &user(2, Some(5)), &[entry("SKU001", "S")]).is_none());
    }
}
