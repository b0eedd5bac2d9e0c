use crate::db_types::{User, WantEntry};

/// Another user together with the want-list on the opposite side of the market to the requester.
///
/// Backends always supply a list here. A user without any entries has an empty `offer_list`, never a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    pub user: User,
    pub offer_list: Vec<WantEntry>,
}

impl Counterparty {
    pub fn new(user: User, offer_list: Option<Vec<WantEntry>>) -> Self {
        Self { user, offer_list: offer_list.unwrap_or_default() }
    }
}
