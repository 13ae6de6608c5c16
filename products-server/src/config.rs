//! Server configuration
//!
//! Values are layered, lowest precedence first:
//! 1. Built-in defaults (`0.0.0.0:5001`, 5 connections, permissive CORS)
//! 2. Optional TOML file
//! 3. Environment variables:
//!    - `DATABASE_URL`: PostgreSQL connection string (required)
//!    - `PRODUCTS_BIND`: listen address
//!    - `PRODUCTS_MAX_CONNECTIONS`: pool size
//!    - `PRODUCTS_CORS_PERMISSIVE`: `true`/`false`
//!
//! CLI flags are applied on top by the binary.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("database URL not set (use --database-url, DATABASE_URL, or [database].url)")]
    MissingDatabaseUrl,

    #[error("max_connections must be at least 1")]
    ZeroConnections,
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: Option<String>,
    /// Pool size; 1 serializes every statement through a single handle
    pub max_connections: u32,
    /// Seconds a request waits for a free connection
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5001)
    pub bind_addr: SocketAddr,

    /// Allow any origin, method and header with credentials (default: true).
    /// When false only localhost origins are allowed.
    pub cors_permissive: bool,

    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            cors_permissive: true,
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(value) = lookup("PRODUCTS_BIND") {
            self.bind_addr = parse_env("PRODUCTS_BIND", value)?;
        }
        if let Some(value) = lookup("PRODUCTS_MAX_CONNECTIONS") {
            self.database.max_connections = parse_env("PRODUCTS_MAX_CONNECTIONS", value)?;
        }
        if let Some(value) = lookup("PRODUCTS_CORS_PERMISSIVE") {
            self.cors_permissive = parse_env("PRODUCTS_CORS_PERMISSIVE", value)?;
        }
        Ok(())
    }

    /// Check the config is usable before anything connects or binds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
