use serde::{Deserialize, Serialize};

use crate::db_types::{NewMatch, WantListKind};

/// Which side of the market started a matching run.
///
/// Both entry points share one orchestrator; the direction decides which lists are compared and which slot of the
/// match row the requester fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchDirection {
    /// A buyer's WTB list is compared against every other user's WTS list.
    BuyerSeeksSellers,
    /// A seller's WTS list is compared against every other user's WTB list.
    SellerSeeksBuyers,
}

impl MatchDirection {
    /// The requester's own list.
    pub fn ask_kind(&self) -> WantListKind {
        match self {
            MatchDirection::BuyerSeeksSellers => WantListKind::Wtb,
            MatchDirection::SellerSeeksBuyers => WantListKind::Wts,
        }
    }

    /// The counterparties' list.
    pub fn offer_kind(&self) -> WantListKind {
        self.ask_kind().opposite()
    }

    pub fn new_match(&self, requester_id: i64, counterparty_id: i64, match_score: f64) -> NewMatch {
        match self {
            MatchDirection::BuyerSeeksSellers => NewMatch::pending(requester_id, counterparty_id, match_score),
            MatchDirection::SellerSeeksBuyers => NewMatch::pending(counterparty_id, requester_id, match_score),
        }
    }

    pub fn requester_role(&self) -> &'static str {
        match self {
            MatchDirection::BuyerSeeksSellers => "buyer",
            MatchDirection::SellerSeeksBuyers => "seller",
        }
    }
}
