//! Database layer - connection pool and product store
//!
//! - One bounded pool per process, created before the listener binds
//! - Every store call issues exactly one auto-committed statement
//! - No retries; a lost connection surfaces on the next failed query

pub mod pool;
pub mod products;

#[cfg(test)]
pub(crate) mod memory;

pub use pool::{connect, shutdown};
pub use products::{DbError, PgProductStore, ProductStore};
