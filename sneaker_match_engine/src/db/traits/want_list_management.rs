use crate::{
    db::traits::{Counterparty, MatchingDatabase},
    db_types::{NewUser, NewWantEntry, User, WantEntry, WantListKind},
};

/// Read access to users and their want-lists, plus the plain persistence calls needed to populate them.
///
/// Credibility scores are owned by the review subsystem. Implementations must read them fresh on every call and
/// never cache them between matching runs.
#[allow(async_fn_in_trait)]
pub trait WantListManagement: MatchingDatabase {
    /// Fetches the user with the given id. If the user does not exist, `None` is returned.
    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, Self::Error>;

    /// Fetches every entry of the given kind owned by `user_id`, oldest first.
    async fn fetch_want_list(&self, user_id: i64, kind: WantListKind) -> Result<Vec<WantEntry>, Self::Error>;

    /// Fetches every user other than `user_id`, each with their `kind` entries. Users with no entries are included
    /// with an empty list.
    async fn fetch_counterparties(&self, user_id: i64, kind: WantListKind) -> Result<Vec<Counterparty>, Self::Error>;

    async fn create_user(&self, user: NewUser) -> Result<User, Self::Error>;

    /// Overwrites the credibility score for the user. Returns `false` if the user does not exist.
    async fn update_credibility(&self, user_id: i64, credibility_score: Option<i64>) -> Result<bool, Self::Error>;

    async fn add_want_entry(&self, kind: WantListKind, entry: NewWantEntry) -> Result<WantEntry, Self::Error>;

    /// Deletes a want entry. Returns `false` if no entry had the given id.
    async fn remove_want_entry(&self, entry_id: i64) -> Result<bool, Self::Error>;
}
