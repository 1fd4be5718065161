//! Environment configuration

use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://kana_drill.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Insert the sample items when the table is empty.
    pub seed_sample_items: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_sample_items: true,
        }
    }
}

impl Config {
    /// Read configuration, falling back to defaults for unset or invalid values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections),
            seed_sample_items: lookup("SEED_SAMPLE_ITEMS")
                .map(|raw| parse_flag(&raw, defaults.seed_sample_items))
                .unwrap_or(defaults.seed_sample_items),
        }
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!("Invalid SEED_SAMPLE_ITEMS value {:?}, using {}", raw, default);
            default
        }
    }
}
