use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{NewUser, User},
};

pub async fn insert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<User, SqliteDatabaseError> {
    if user_by_username(&user.username, &mut *conn).await?.is_some() {
        return Err(SqliteDatabaseError::DuplicateUsername(user.username));
    }
    let user = sqlx::query_as::<_, User>(
        r#"
            INSERT INTO users (username, credibility_score) VALUES ($1, $2)
            RETURNING id, username, credibility_score;
        "#,
    )
    .bind(user.username)
    .bind(user.credibility_score)
    .fetch_one(conn)
    .await?;
    debug!("🗃️ User #{} ({}) created", user.id, user.username);
    Ok(user)
}

pub async fn user_by_id(user_id: i64, conn: &mut SqliteConnection) -> Result<Option<User>, SqliteDatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT id, username, credibility_score FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(conn)
        .await?;
    Ok(user)
}

pub async fn user_by_username(username: &str, conn: &mut SqliteConnection) -> Result<Option<User>, SqliteDatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT id, username, credibility_score FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(conn)
        .await?;
    Ok(user)
}

/// Every user except `user_id`, in id order.
pub async fn all_users_except(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<User>, SqliteDatabaseError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, credibility_score FROM users WHERE id != $1 ORDER BY id ASC",
    )
    .bind(user_id)
    .fetch_all(conn)
    .await?;
    trace!("🗃️ {} users other than #{user_id} fetched", users.len());
    Ok(users)
}

pub async fn update_credibility(
    user_id: i64,
    credibility_score: Option<i64>,
    conn: &mut SqliteConnection,
) -> Result<bool, SqliteDatabaseError> {
    let result = sqlx::query(
        "UPDATE users SET credibility_score = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
    )
    .bind(credibility_score)
    .bind(user_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() > 0)
}
