//! products-server: HTTP service over a PostgreSQL `products` table
//!
//! Exposes paginated listing, id lookup, keyword search and insert. Each
//! request issues one statement through a shared connection pool that is
//! opened before the listener binds and closed after it stops.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

use std::sync::Arc;

pub use config::{ConfigError, DatabaseConfig, ServerConfig};
pub use db::{DbError, PgProductStore, ProductStore};
pub use http::{build_router, run_server, ServerError};
pub use state::AppState;

/// Start the HTTP server.
///
/// Fails before binding if the config is incomplete or the store is
/// unreachable. The pool is closed once the server stops, whether it
/// stopped cleanly or with an error.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    let pool = db::connect(&config.database).await?;
    let state = AppState::new(Arc::new(PgProductStore::new(pool.clone())));

    let result = run_server(state, config).await;
    db::shutdown(&pool).await;
    result
}
