//! Connection manager
//!
//! Uses sqlx PgPool with explicit connection limits. A pool of size 1 keeps
//! the single-handle discipline; larger pools let concurrent requests use
//! distinct connections.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::DbError;
use crate::config::DatabaseConfig;

/// Create the pool and verify the store is reachable.
///
/// Connects eagerly so startup fails before any traffic is accepted.
///
/// # Errors
///
/// Returns [`DbError::NotConfigured`] when no URL is set, or the sqlx error
/// if the connection or the probe query fails.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let url = config
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(DbError::NotConfigured)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool connected"
    );
    Ok(pool)
}

/// Close the pool. Safe to call more than once; never fails.
pub async fn shutdown(pool: &PgPool) {
    if pool.is_closed() {
        tracing::debug!("Database pool already closed");
        return;
    }
    pool.close().await;
    tracing::info!("Database pool closed");
}
