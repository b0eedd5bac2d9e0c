use std::collections::HashMap;

use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db::{
        sqlite::{users, SqliteDatabaseError},
        traits::Counterparty,
    },
    db_types::{NewWantEntry, WantEntry, WantListKind},
};

const ENTRY_COLUMNS: &str = "id, owner_user_id, product_sku, size, quantity";

pub async fn insert_entry(
    kind: WantListKind,
    entry: NewWantEntry,
    conn: &mut SqliteConnection,
) -> Result<WantEntry, SqliteDatabaseError> {
    if users::user_by_id(entry.owner_user_id, &mut *conn).await?.is_none() {
        return Err(SqliteDatabaseError::UserNotFound(entry.owner_user_id));
    }
    if entry.quantity < 1 {
        return Err(SqliteDatabaseError::QueryError(format!("Quantity must be positive, got {}", entry.quantity)));
    }
    let sql = format!(
        "INSERT INTO want_entries (owner_user_id, kind, product_sku, size, quantity) VALUES ($1, $2, $3, $4, $5) \
         RETURNING {ENTRY_COLUMNS}"
    );
    let entry = sqlx::query_as::<_, WantEntry>(&sql)
        .bind(entry.owner_user_id)
        .bind(kind)
        .bind(entry.product_sku)
        .bind(entry.size)
        .bind(entry.quantity)
        .fetch_one(conn)
        .await?;
    debug!("🗃️ {kind} entry #{} ({} / {}) added for user #{}", entry.id, entry.product_sku, entry.size, entry.owner_user_id);
    Ok(entry)
}

pub async fn delete_entry(entry_id: i64, conn: &mut SqliteConnection) -> Result<bool, SqliteDatabaseError> {
    let result = sqlx::query("DELETE FROM want_entries WHERE id = $1").bind(entry_id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn fetch_for_user(
    user_id: i64,
    kind: WantListKind,
    conn: &mut SqliteConnection,
) -> Result<Vec<WantEntry>, SqliteDatabaseError> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM want_entries WHERE owner_user_id = $1 AND kind = $2 ORDER BY id ASC");
    let entries = sqlx::query_as::<_, WantEntry>(&sql).bind(user_id).bind(kind).fetch_all(conn).await?;
    trace!("🗃️ {} {kind} entries fetched for user #{user_id}", entries.len());
    Ok(entries)
}

/// Fetches every other user with their `kind` list. Users without entries get an empty list.
pub async fn fetch_counterparties(
    user_id: i64,
    kind: WantListKind,
    conn: &mut SqliteConnection,
) -> Result<Vec<Counterparty>, SqliteDatabaseError> {
    let others = users::all_users_except(user_id, &mut *conn).await?;
    if others.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM want_entries WHERE owner_user_id != $1 AND kind = $2 ORDER BY owner_user_id, id"
    );
    let entries = sqlx::query_as::<_, WantEntry>(&sql).bind(user_id).bind(kind).fetch_all(conn).await?;
    let mut by_owner = entries.into_iter().fold(HashMap::<i64, Vec<WantEntry>>::new(), |mut acc, entry| {
        acc.entry(entry.owner_user_id).or_default().push(entry);
        acc
    });
    let counterparties = others
        .into_iter()
        .map(|user| {
            let offers = by_owner.remove(&user.id);
            Counterparty::new(user, offers)
        })
        .collect::<Vec<_>>();
    trace!("🗃️ {} counterparties with {kind} lists fetched for user #{user_id}", counterparties.len());
    Ok(counterparties)
}
