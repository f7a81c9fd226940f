//! Process configuration, read once from the environment at startup.

use std::{net::SocketAddr, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("invalid listen address {0}")]
    Addr(String),
}

/// Connection settings for the PostgreSQL pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub pool_max: u32,
    pub idle_timeout: Duration,
    pub connect_timeout: Duration,
    /// Run `CREATE TABLE IF NOT EXISTS` at startup.
    pub init_schema: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            db: DbConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: "loguser".to_string(),
                password: "logpassword123".to_string(),
                name: "logdb".to_string(),
                pool_max: 20,
                idle_timeout: Duration::from_millis(30_000),
                connect_timeout: Duration::from_millis(2_000),
                init_schema: true,
            },
        }
    }
}

impl Config {
    /// Build from the process environment, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let d = Config::default();

        Ok(Config {
            host: get("HOST").unwrap_or(d.host),
            port: parse_or(get("PORT"), "PORT", d.port)?,
            db: DbConfig {
                host: get("DB_HOST").unwrap_or(d.db.host),
                port: parse_or(get("DB_PORT"), "DB_PORT", d.db.port)?,
                user: get("DB_USER").unwrap_or(d.db.user),
                password: get("DB_PASSWORD").unwrap_or(d.db.password),
                name: get("DB_NAME").unwrap_or(d.db.name),
                pool_max: parse_or(get("DB_POOL_MAX"), "DB_POOL_MAX", d.db.pool_max)?,
                idle_timeout: parse_opt::<u64>(get("DB_IDLE_TIMEOUT_MS"), "DB_IDLE_TIMEOUT_MS")?
                    .map(Duration::from_millis)
                    .unwrap_or(d.db.idle_timeout),
                connect_timeout: parse_opt::<u64>(
                    get("DB_CONNECT_TIMEOUT_MS"),
                    "DB_CONNECT_TIMEOUT_MS",
                )?
                .map(Duration::from_millis)
                .unwrap_or(d.db.connect_timeout),
                init_schema: match get("DB_INIT_SCHEMA") {
                    None => d.db.init_schema,
                    Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                        key: "DB_INIT_SCHEMA",
                        value: v,
                    })?,
                },
            },
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };
        raw.parse().map_err(|_| ConfigError::Addr(raw))
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_opt(raw, key)?.unwrap_or(default))
}

fn parse_opt<T: FromStr>(raw: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    raw.map(|v| {
        v.trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: v.clone() })
    })
    .transpose()
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
