//! Connectivity check command

use anyhow::{Context, Result};
use clap::Parser;
use products_server::{db, PgProductStore, ProductStore};

use super::DatabaseArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Connect, probe, count, disconnect.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let config = args.db.load()?;

    let pool = db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    let store = PgProductStore::new(pool);

    let result = probe(&store).await;
    db::shutdown(store.pool()).await;

    let count = result?;
    println!("database reachable, {} products", count);
    Ok(())
}

async fn probe(store: &PgProductStore) -> Result<i64> {
    store.ping().await.context("Liveness query failed")?;
    store
        .count()
        .await
        .context("Failed to count products (does the products table exist?)")
}
