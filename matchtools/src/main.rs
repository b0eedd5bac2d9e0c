use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use log::*;

mod commands;
mod config;
mod formatting;

use config::EngineConfig;
use sneaker_match_engine::db_types::WantListKind;

#[derive(Parser, Debug)]
#[command(version, about = "Operate the sneaker marketplace match engine")]
pub struct Arguments {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply any pending database migrations
    Migrate,
    /// Print the environment variables the engine reads
    Env,
    #[command(subcommand)]
    /// Create users or change their credibility score
    User(UserCommand),
    #[command(subcommand)]
    /// Maintain WTB and WTS lists
    Want(WantCommand),
    #[command(subcommand)]
    /// Run a matching pass for a buyer or a seller
    Match(MatchCommand),
    /// List every recorded match for a user
    Matches {
        #[arg(required = true, index = 1)]
        user_id: i64,
    },
    /// List the notifications for a user
    Notifications {
        #[arg(required = true, index = 1)]
        user_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a new user
    Add {
        #[arg(required = true, index = 1)]
        username: String,
        #[arg(short = 'c', long = "credibility")]
        credibility: Option<i64>,
    },
    /// Set the credibility score for a user. Leave the score out to clear it.
    Credibility {
        #[arg(required = true, index = 1)]
        user_id: i64,
        #[arg(index = 2, allow_negative_numbers = true)]
        score: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum WantCommand {
    /// Add an entry to a user's WTB or WTS list
    Add(WantAddParams),
    /// Remove an entry by id
    Remove {
        #[arg(required = true, index = 1)]
        entry_id: i64,
    },
    /// Show a user's WTB or WTS list
    List {
        #[arg(required = true, index = 1)]
        user_id: i64,
        /// wtb or wts
        #[arg(required = true, index = 2)]
        kind: WantListKind,
    },
}

#[derive(Debug, Args)]
pub struct WantAddParams {
    #[arg(required = true, index = 1)]
    user_id: i64,
    /// wtb or wts
    #[arg(required = true, index = 2)]
    kind: WantListKind,
    #[arg(required = true, index = 3)]
    sku: String,
    #[arg(required = true, index = 4)]
    size: String,
    #[arg(short = 'q', long = "quantity", default_value = "1")]
    quantity: i64,
}

#[derive(Debug, Subcommand)]
pub enum MatchCommand {
    /// Find sellers for a buyer's WTB list
    Buyer {
        #[arg(required = true, index = 1)]
        user_id: i64,
    },
    /// Find buyers for a seller's WTS list
    Seller {
        #[arg(required = true, index = 1)]
        user_id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let cli = Arguments::parse();
    let config = EngineConfig::from_env_or_default();
    debug!("🪛️ Configuration: {config:?}");
    if let Err(e) = commands::handle_command(cli.command, cli.json, config).await {
        error!("{e:#}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
