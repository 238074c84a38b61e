//! Server configuration parsed from environment variables.
//!
//! Variables:
//! - `PORT`: listen port, default 3000
//! - `REMOTE_DB`: `true` selects the Postgres store, default embedded
//! - `DATABASE_URL`: required when `REMOTE_DB` is true
//! - `DB_MAX_CONNECTIONS`: pool size, default 5
//! - `APP_NAME`: reported by `/api/nodeinfo`

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_APP_NAME: &str = "Wiz Khalubernetes";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{0} is required when REMOTE_DB is enabled")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres when set, embedded in-memory store otherwise.
    pub remote_db: bool,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub app_name: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not parse, or if `REMOTE_DB` is on
    /// without a `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let remote_db = match lookup("REMOTE_DB") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "REMOTE_DB", value: raw })?,
            None => false,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if remote_db && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let app_name = lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());

        Ok(Self { port, remote_db, database_url, db_max_connections, app_name })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
