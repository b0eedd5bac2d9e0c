use crate::{
    db::traits::MatchingDatabase,
    db_types::{NewNotification, Notification},
};

#[allow(async_fn_in_trait)]
pub trait NotificationManagement: MatchingDatabase {
    async fn create_notification(&self, notification: NewNotification) -> Result<Notification, Self::Error>;

    /// All notifications for the user, newest first.
    async fn fetch_notifications_for_user(&self, user_id: i64) -> Result<Vec<Notification>, Self::Error>;

    /// Returns `false` if the notification does not exist.
    async fn mark_notification_read(&self, notification_id: i64) -> Result<bool, Self::Error>;
}
