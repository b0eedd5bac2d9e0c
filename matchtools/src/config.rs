use std::env::{self, VarError};

use log::*;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/sneaker_matches.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_EVENT_BUFFER_SIZE: usize = 25;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// How many events can queue up for a hook before publishers have to wait
    pub event_buffer_size: usize,
    /// If true, pending migrations are applied every time the database is opened.
    pub auto_migrate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            auto_migrate: true,
        }
    }
}

impl EngineConfig {
    pub fn from_env_or_default() -> Self {
        let database_url = env::var("SMP_DATABASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ SMP_DATABASE_URL is not set. Using {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.into()
        });
        let max_connections = parse_number("SMP_MAX_DB_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);
        let event_buffer_size = parse_number("SMP_EVENT_BUFFER_SIZE", DEFAULT_EVENT_BUFFER_SIZE);
        let auto_migrate = parse_boolean_flag(env::var("SMP_AUTO_MIGRATE").ok(), true);
        Self { database_url, max_connections, event_buffer_size, auto_migrate }
    }
}

fn parse_number<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(s) => s.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
            default
        }),
        Err(_) => default,
    }
}

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

pub fn display_envs() {
    const DISPLAY_ENVS: [&str; 5] =
        ["RUST_LOG", "SMP_DATABASE_URL", "SMP_MAX_DB_CONNECTIONS", "SMP_EVENT_BUFFER_SIZE", "SMP_AUTO_MIGRATE"];

    println!("Current environment values:");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boolean_flags() {
        assert!(parse_boolean_flag(Some("YES".into()), false));
        assert!(!parse_boolean_flag(Some(" off ".into()), true));
        assert!(parse_boolean_flag(Some("maybe".into()), true));
        assert!(!parse_boolean_flag(None, false));
    }

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.event_buffer_size, 25);
        assert!(config.auto_migrate);
    }
}
