use std::fmt::Debug;

use log::*;
use sqlx::{migrate, SqlitePool};

use super::{matches, new_pool, notifications, users, want_lists, SqliteDatabaseError};
use crate::{
    db::traits::{Counterparty, MatchManagement, MatchingDatabase, NotificationManagement, WantListManagement},
    db_types::{Match, NewMatch, NewNotification, NewUser, NewWantEntry, Notification, User, WantEntry, WantListKind},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl MatchingDatabase for SqliteDatabase {
    type Error = SqliteDatabaseError;

    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.pool.close().await;
        Ok(())
    }
}

impl WantListManagement for SqliteDatabase {
    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        users::user_by_id(user_id, &mut conn).await
    }

    async fn fetch_want_list(&self, user_id: i64, kind: WantListKind) -> Result<Vec<WantEntry>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        want_lists::fetch_for_user(user_id, kind, &mut conn).await
    }

    /// The users and their entries are read inside one transaction so that a concurrent edit cannot leave a user in
    /// the result with somebody else's snapshot of the lists.
    async fn fetch_counterparties(&self, user_id: i64, kind: WantListKind) -> Result<Vec<Counterparty>, Self::Error> {
        let mut tx = self.pool.begin().await?;
        let counterparties = want_lists::fetch_counterparties(user_id, kind, &mut tx).await?;
        tx.commit().await?;
        Ok(counterparties)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, Self::Error> {
        let mut tx = self.pool.begin().await?;
        let user = users::insert_user(user, &mut tx).await?;
        tx.commit().await?;
        Ok(user)
    }

    async fn update_credibility(&self, user_id: i64, credibility_score: Option<i64>) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let updated = users::update_credibility(user_id, credibility_score, &mut conn).await?;
        trace!("🗃️ Credibility for user #{user_id} set to {credibility_score:?}. Updated: {updated}");
        Ok(updated)
    }

    async fn add_want_entry(&self, kind: WantListKind, entry: NewWantEntry) -> Result<WantEntry, Self::Error> {
        let mut tx = self.pool.begin().await?;
        let entry = want_lists::insert_entry(kind, entry, &mut tx).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn remove_want_entry(&self, entry_id: i64) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        want_lists::delete_entry(entry_id, &mut conn).await
    }
}

impl MatchManagement for SqliteDatabase {
    async fn save_matches(&self, new_matches: &[NewMatch]) -> Result<Vec<Match>, Self::Error> {
        if new_matches.is_empty() {
            return Ok(Vec::new());
        }
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(new_matches.len());
        for new_match in new_matches {
            // An early return drops `tx`, which rolls the whole batch back.
            let record = matches::insert_match(new_match, &mut tx).await?;
            saved.push(record);
        }
        tx.commit().await?;
        debug!("🗃️ {} matches saved", saved.len());
        Ok(saved)
    }

    async fn fetch_match(&self, match_id: i64) -> Result<Option<Match>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        matches::fetch_match(match_id, &mut conn).await
    }

    async fn fetch_matches_for_user(&self, user_id: i64) -> Result<Vec<Match>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        matches::fetch_matches_for_user(user_id, &mut conn).await
    }
}

impl NotificationManagement for SqliteDatabase {
    async fn create_notification(&self, notification: NewNotification) -> Result<Notification, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        notifications::insert_notification(notification, &mut conn).await
    }

    async fn fetch_notifications_for_user(&self, user_id: i64) -> Result<Vec<Notification>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        notifications::fetch_for_user(user_id, &mut conn).await
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<bool, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        notifications::mark_read(notification_id, &mut conn).await
    }
}

impl SqliteDatabase {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        trace!("🗃️ Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Brings the schema up to date with the embedded migrations.
    pub async fn migrate(&self) -> Result<(), SqliteDatabaseError> {
        migrate!("./src/db/sqlite/migrations").run(&self.pool).await?;
        info!("🗃️ Migrations complete");
        Ok(())
    }
}
