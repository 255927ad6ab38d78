//! Server configuration read from environment variables.
//!
//! - `TODO_DB_PATH`: SQLite database file path (default: "todos.db");
//!   `:memory:` selects the in-memory backend
//! - `TODO_HOST`: listen address (default: "0.0.0.0")
//! - `TODO_PORT`: listen port (default: "3000")

use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "todos.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Marker path that selects the in-memory backend.
pub const MEMORY_DB_PATH: &str = ":memory:";

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TODO_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Settings for the `todo-server` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: DEFAULT_DB_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(path) = lookup("TODO_DB_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty("TODO_DB_PATH"));
            }
            config.db_path = path;
        }
        if let Some(host) = lookup("TODO_HOST") {
            if host.trim().is_empty() {
                return Err(ConfigError::Empty("TODO_HOST"));
            }
            config.host = host;
        }
        if let Some(port) = lookup("TODO_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        Ok(config)
    }

    /// `host:port` for binding the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the in-memory backend was requested.
    pub fn uses_memory(&self) -> bool {
        self.db_path == MEMORY_DB_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert!(!config.uses_memory());
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TODO_DB_PATH", ":memory:"),
            ("TODO_HOST", "127.0.0.1"),
            ("TODO_PORT", "8080"),
        ]))
        .unwrap();
        assert!(config.uses_memory());
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("TODO_PORT", "http")])),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("TODO_PORT", "70000")])),
            Err(ConfigError::InvalidPort("70000".into()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("TODO_DB_PATH", " ")])),
            Err(ConfigError::Empty("TODO_DB_PATH"))
        );
    }
}
