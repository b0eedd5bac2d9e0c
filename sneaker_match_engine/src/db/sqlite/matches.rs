use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{Match, NewMatch},
};

const MATCH_COLUMNS: &str = "id, buyer_id, seller_id, match_score, status, created_at";

/// Inserts a single match. This is not atomic on its own; run it inside a transaction and pass `&mut tx` when a batch
/// has to succeed or fail as a whole.
pub async fn insert_match(new_match: &NewMatch, conn: &mut SqliteConnection) -> Result<Match, SqliteDatabaseError> {
    let sql = format!(
        "INSERT INTO matches (buyer_id, seller_id, match_score, status) VALUES ($1, $2, $3, $4) RETURNING \
         {MATCH_COLUMNS}"
    );
    let record = sqlx::query_as::<_, Match>(&sql)
        .bind(new_match.buyer_id)
        .bind(new_match.seller_id)
        .bind(new_match.match_score)
        .bind(new_match.status)
        .fetch_one(conn)
        .await?;
    trace!("🗃️ Match #{} between buyer #{} and seller #{} inserted", record.id, record.buyer_id, record.seller_id);
    Ok(record)
}

pub async fn fetch_match(match_id: i64, conn: &mut SqliteConnection) -> Result<Option<Match>, SqliteDatabaseError> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1");
    let record = sqlx::query_as::<_, Match>(&sql).bind(match_id).fetch_optional(conn).await?;
    Ok(record)
}

pub async fn fetch_matches_for_user(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<Match>, SqliteDatabaseError> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE buyer_id = $1 OR seller_id = $1 ORDER BY created_at DESC, id DESC"
    );
    let records = sqlx::query_as::<_, Match>(&sql).bind(user_id).fetch_all(conn).await?;
    Ok(records)
}
