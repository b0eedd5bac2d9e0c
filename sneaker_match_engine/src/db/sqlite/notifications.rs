use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{NewNotification, Notification},
};

const NOTIFICATION_COLUMNS: &str = "id, user_id, notification_type, message, match_id, is_read, created_at";

pub async fn insert_notification(
    notification: NewNotification,
    conn: &mut SqliteConnection,
) -> Result<Notification, SqliteDatabaseError> {
    let sql = format!(
        "INSERT INTO notifications (user_id, notification_type, message, match_id) VALUES ($1, $2, $3, $4) RETURNING \
         {NOTIFICATION_COLUMNS}"
    );
    let record = sqlx::query_as::<_, Notification>(&sql)
        .bind(notification.user_id)
        .bind(notification.notification_type)
        .bind(notification.message)
        .bind(notification.match_id)
        .fetch_one(conn)
        .await?;
    trace!("🗃️ Notification #{} created for user #{}", record.id, record.user_id);
    Ok(record)
}

pub async fn fetch_for_user(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<Notification>, SqliteDatabaseError> {
    let sql =
        format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE user_id = $1 ORDER BY created_at DESC, id DESC");
    let records = sqlx::query_as::<_, Notification>(&sql).bind(user_id).fetch_all(conn).await?;
    Ok(records)
}

pub async fn mark_read(notification_id: i64, conn: &mut SqliteConnection) -> Result<bool, SqliteDatabaseError> {
    let result =
        sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = $1").bind(notification_id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
