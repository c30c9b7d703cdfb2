//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                   | Default       |
//! |----------------------------|---------------|
//! | `STEEZ_HOST`               | `0.0.0.0`     |
//! | `STEEZ_PORT`               | `8000`        |
//! | `STEEZ_DB_PATH`            | `./steez.db`  |
//! | `STEEZ_DB_MAX_CONNECTIONS` | `5`           |
//! | `STEEZ_SUPPLIERS`          | built-in list |
//! | `STEEZ_PARTIES`            | built-in list |
//! | `STEEZ_WORK_TYPES`         | built-in list |
//!
//! The three list variables are comma-separated and replace the built-in list
//! entirely.

use std::env;
use std::path::PathBuf;

use crate::state::FormOptions;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// HTTP port.
    pub port: u16,

    /// SQLite database file.
    pub database_path: PathBuf,

    /// Pool size.
    pub db_max_connections: u32,

    /// Lists served by `GET /options`.
    pub options: FormOptions,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = FormOptions::default();
        if let Some(raw) = lookup("STEEZ_SUPPLIERS") {
            options.suppliers = parse_list("STEEZ_SUPPLIERS", &raw)?;
        }
        if let Some(raw) = lookup("STEEZ_PARTIES") {
            options.parties = parse_list("STEEZ_PARTIES", &raw)?;
        }
        if let Some(raw) = lookup("STEEZ_WORK_TYPES") {
            options.work_types = parse_list("STEEZ_WORK_TYPES", &raw)?;
        }

        let config = ServerConfig {
            host: lookup("STEEZ_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("STEEZ_PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STEEZ_PORT".to_string()))?,

            database_path: lookup("STEEZ_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./steez.db")),

            db_max_connections: lookup("STEEZ_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STEEZ_DB_MAX_CONNECTIONS".to_string()))?,

            options,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "STEEZ_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated list, dropping blanks. An empty result is an error.
fn parse_list(key: &str, raw: &str) -> Result<Vec<String>, ConfigError> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }

    Ok(items)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
