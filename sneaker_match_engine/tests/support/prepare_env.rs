#![allow(dead_code)]

use log::*;
use sneaker_match_engine::{
    db_types::{NewUser, NewWantEntry, User, WantListKind},
    MatchingDatabase,
    SqliteDatabase,
    WantListManagement,
};
use sqlx::{migrate::MigrateDatabase, Sqlite};

pub fn random_db_path() -> String {
    let dir = std::env::temp_dir();
    format!("sqlite://{}/smp_test_store_{}.db", dir.display(), rand::random::<u64>())
}

/// Creates a fresh database at a random path with the schema applied.
pub async fn prepare_test_env() -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    let url = random_db_path();
    if let Err(e) = Sqlite::drop_database(&url).await {
        trace!("No stale database at {url}: {e:?}");
    }
    Sqlite::create_database(&url).await.expect("Error creating database");
    let db = SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating connection to database");
    db.migrate().await.expect("Error running DB migrations");
    debug!("🚀️ Test database ready at {url}");
    db
}

pub async fn tear_down(mut db: SqliteDatabase) {
    if let Err(e) = db.close().await {
        error!("🚀️ Failed to close database: {e}");
    }
    let url = db.url().to_string();
    if let Err(e) = Sqlite::drop_database(&url).await {
        warn!("🚀️ Could not remove test database {url}: {e}");
    }
}

/// Adds a user with the given credibility and want-list.
pub async fn seed_user(
    db: &SqliteDatabase,
    name: &str,
    credibility: Option<i64>,
    kind: WantListKind,
    items: &[(&str, &str)],
) -> User {
    let mut new_user = NewUser::new(name);
    new_user.credibility_score = credibility;
    let user = db.create_user(new_user).await.expect("Error creating user");
    for (sku, size) in items {
        db.add_want_entry(kind, NewWantEntry::new(user.id, *sku, *size)).await.expect("Error adding want entry");
    }
    user
}
