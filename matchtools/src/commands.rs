use std::path::Path;

use anyhow::{anyhow, Result};
use futures::FutureExt;
use log::*;
use serde::Serialize;
use sneaker_match_engine::{
    db_types::{NewUser, NewWantEntry},
    events::{EventHandlers, EventHooks},
    MatchDirection,
    MatchFlowApi,
    MatchHistoryApi,
    SqliteDatabase,
    WantListManagement,
};

use crate::{
    config::{display_envs, EngineConfig},
    formatting::{format_candidates, format_matches, format_notifications, format_user, format_want_list},
    Command,
    MatchCommand,
    UserCommand,
    WantCommand,
};

pub async fn handle_command(command: Command, json: bool, config: EngineConfig) -> Result<()> {
    match command {
        Command::Env => display_envs(),
        Command::Migrate => {
            open_database(&config, true).await?;
            println!("Database at {} is up to date", config.database_url);
        },
        Command::User(cmd) => handle_user_command(&open_database(&config, false).await?, cmd, json).await?,
        Command::Want(cmd) => handle_want_command(&open_database(&config, false).await?, cmd, json).await?,
        Command::Match(cmd) => run_match(open_database(&config, false).await?, cmd, json, &config).await?,
        Command::Matches { user_id } => {
            let history = MatchHistoryApi::new(open_database(&config, false).await?);
            let matches = history.matches_for_user(user_id).await?;
            output(json, &matches, || format_matches(&matches))?;
        },
        Command::Notifications { user_id } => {
            let history = MatchHistoryApi::new(open_database(&config, false).await?);
            let notifications = history.notifications_for_user(user_id).await?;
            output(json, &notifications, || format_notifications(&notifications))?;
        },
    }
    Ok(())
}

async fn open_database(config: &EngineConfig, force_migrate: bool) -> Result<SqliteDatabase> {
    // Sqlite creates the file on demand, but not the directory it lives in.
    if let Some(parent) = config.database_url.strip_prefix("sqlite://").and_then(|p| Path::new(p).parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("🪛️ Creating database directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    let db = SqliteDatabase::new_with_url(&config.database_url, config.max_connections).await?;
    if config.auto_migrate || force_migrate {
        db.migrate().await?;
    }
    Ok(db)
}

async fn handle_user_command(db: &SqliteDatabase, cmd: UserCommand, json: bool) -> Result<()> {
    match cmd {
        UserCommand::Add { username, credibility } => {
            let mut new_user = NewUser::new(username);
            new_user.credibility_score = credibility;
            let user = db.create_user(new_user).await?;
            output(json, &user, || format_user(&user))?;
        },
        UserCommand::Credibility { user_id, score } => {
            if !db.update_credibility(user_id, score).await? {
                return Err(anyhow!("User #{user_id} does not exist"));
            }
            let user = db.fetch_user(user_id).await?.ok_or_else(|| anyhow!("User #{user_id} does not exist"))?;
            output(json, &user, || format_user(&user))?;
        },
    }
    Ok(())
}

async fn handle_want_command(db: &SqliteDatabase, cmd: WantCommand, json: bool) -> Result<()> {
    match cmd {
        WantCommand::Add(params) => {
            let entry = NewWantEntry::new(params.user_id, params.sku, params.size).with_quantity(params.quantity);
            let entry = db.add_want_entry(params.kind, entry).await?;
            output(json, &entry, || {
                format!("Added {} entry #{}: {} / {} x{}", params.kind, entry.id, entry.product_sku, entry.size, entry.quantity)
            })?;
        },
        WantCommand::Remove { entry_id } => {
            if !db.remove_want_entry(entry_id).await? {
                return Err(anyhow!("Want entry #{entry_id} does not exist"));
            }
            println!("Removed want entry #{entry_id}");
        },
        WantCommand::List { user_id, kind } => {
            let entries = db.fetch_want_list(user_id, kind).await?;
            output(json, &entries, || format_want_list(user_id, kind, &entries))?;
        },
    }
    Ok(())
}

async fn run_match(db: SqliteDatabase, cmd: MatchCommand, json: bool, config: &EngineConfig) -> Result<()> {
    let (user_id, direction) = match cmd {
        MatchCommand::Buyer { user_id } => (user_id, MatchDirection::BuyerSeeksSellers),
        MatchCommand::Seller { user_id } => (user_id, MatchDirection::SellerSeeksBuyers),
    };
    let mut hooks = EventHooks::default();
    hooks.on_match_created(|ev| {
        async move {
            info!(
                "📧 Match #{} queued for delivery to user #{}: {}",
                ev.match_record.id,
                ev.recipient_id(),
                ev.notification.message
            );
        }
        .boxed()
    });
    let handlers = EventHandlers::new(config.event_buffer_size, hooks);
    let api = MatchFlowApi::new(db, handlers.producers());
    let handler_tasks = handlers.start_handlers();
    let result = api.find_matches(user_id, direction).await;
    drop(api);
    for task in handler_tasks {
        if let Err(e) = task.await {
            warn!("📬️ Event handler did not shut down cleanly: {e}");
        }
    }
    let candidates = result?;
    output(json, &candidates, || format_candidates(&candidates))
}

fn output<T, F>(json: bool, value: &T, table: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", table());
    }
    Ok(())
}
