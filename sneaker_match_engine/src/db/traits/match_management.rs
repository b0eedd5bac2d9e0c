use crate::{
    db::traits::MatchingDatabase,
    db_types::{Match, NewMatch},
};

#[allow(async_fn_in_trait)]
pub trait MatchManagement: MatchingDatabase {
    /// Stores the whole batch in a single atomic transaction and returns the stored rows in the same order.
    ///
    /// If any row fails to insert, nothing from the batch is kept and an error is returned.
    async fn save_matches(&self, matches: &[NewMatch]) -> Result<Vec<Match>, Self::Error>;

    async fn fetch_match(&self, match_id: i64) -> Result<Option<Match>, Self::Error>;

    /// Every match where the user is either the buyer or the seller, newest first.
    async fn fetch_matches_for_user(&self, user_id: i64) -> Result<Vec<Match>, Self::Error>;
}
