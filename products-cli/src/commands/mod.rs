//! Command implementations for the products CLI

pub mod check;
pub mod serve;

pub use check::{run_check, CheckArgs};
pub use serve::{run_serve, ServeArgs};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use products_server::ServerConfig;

/// Options shared by every command that talks to the database
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// TOML config file
    #[arg(long, short = 'c', env = "PRODUCTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database URL (overrides config file and DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled connections (1 = single shared handle)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Seconds to wait for a database connection
    #[arg(long, value_name = "SECS")]
    pub acquire_timeout: Option<u64>,
}

impl DatabaseArgs {
    /// Load config (defaults, file, environment) and apply CLI overrides.
    pub fn load(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.database.max_connections = max;
        }
        if let Some(secs) = self.acquire_timeout {
            config.database.acquire_timeout_secs = secs;
        }

        config.validate().context(
            "Invalid configuration. Set DATABASE_URL via --database-url, the environment, or a .env file",
        )?;
        Ok(config)
    }
}
