//! HTTP server command
//!
//! Opens the pool, serves until shutdown, then closes the pool.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Address to bind to (default: 0.0.0.0:5001)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Restrict CORS to localhost origins instead of allowing any origin
    #[arg(long)]
    pub cors_localhost: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = args.db.load()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.cors_localhost {
        config.cors_permissive = false;
    }

    tracing::info!(
        bind = %config.bind_addr,
        max_connections = config.database.max_connections,
        cors_permissive = config.cors_permissive,
        "Starting products server"
    );

    // Blocks until shutdown
    products_server::serve(config)
        .await
        .context("Server error")?;

    Ok(())
}
