use std::fmt::Debug;

use log::*;

use crate::{
    db::traits::{MatchManagement, NotificationManagement, WantListManagement},
    db_types::{Match, Notification},
    mx_api::errors::MatchHistoryError,
};

/// Read-side access to what past matching runs produced.
pub struct MatchHistoryApi<B> {
    db: B,
}

impl<B> Debug for MatchHistoryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchHistoryApi")
    }
}

impl<B> MatchHistoryApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> MatchHistoryApi<B>
where B: WantListManagement + MatchManagement + NotificationManagement
{
    /// Every match the user took part in, on either side, newest first.
    pub async fn matches_for_user(&self, user_id: i64) -> Result<Vec<Match>, MatchHistoryError> {
        self.ensure_user_exists(user_id).await?;
        self.db.fetch_matches_for_user(user_id).await.map_err(|e| MatchHistoryError::DatabaseError(e.to_string()))
    }

    pub async fn notifications_for_user(&self, user_id: i64) -> Result<Vec<Notification>, MatchHistoryError> {
        self.ensure_user_exists(user_id).await?;
        self.db
            .fetch_notifications_for_user(user_id)
            .await
            .map_err(|e| MatchHistoryError::DatabaseError(e.to_string()))
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<bool, MatchHistoryError> {
        let updated = self
            .db
            .mark_notification_read(notification_id)
            .await
            .map_err(|e| MatchHistoryError::DatabaseError(e.to_string()))?;
        if !updated {
            debug!("Notification #{notification_id} does not exist; nothing marked as read");
        }
        Ok(updated)
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), MatchHistoryError> {
        match self.db.fetch_user(user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(MatchHistoryError::UserNotFound(user_id)),
            Err(e) => Err(MatchHistoryError::DatabaseError(e.to_string())),
        }
    }
}
