//! In-memory stores for router tests

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DbError, ProductStore};
use crate::models::{NewProduct, Product};

/// Vec-backed store mirroring the PostgreSQL statements.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Product>>,
}

impl MemoryStore {
    pub fn with_products(names: &[(&str, &str)]) -> Self {
        let rows = names
            .iter()
            .zip(1..)
            .map(|((name, description), id)| Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect();
        Self {
            rows: Mutex::new(rows),
        }
    }
}

fn store_error(message: &str) -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(message.to_string()))
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn count(&self) -> Result<i64, DbError> {
        Ok(self.rows.lock().await.len() as i64)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DbError> {
        if limit < 0 {
            return Err(store_error("LIMIT must not be negative"));
        }
        if offset < 0 {
            return Err(store_error("OFFSET must not be negative"));
        }
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|p| i64::from(p.id) == id).cloned())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DbError> {
        let needle = keyword.to_lowercase();
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        let mut rows = self.rows.lock().await;
        let id = rows.last().map_or(1, |p| p.id + 1);
        let created = Product {
            id,
            name: product.name,
            description: product.description,
        };
        rows.push(created.clone());
        Ok(created)
    }
}

/// Store whose every call fails, as if the connection was lost.
pub struct BrokenStore;

#[async_trait]
impl ProductStore for BrokenStore {
    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn count(&self) -> Result<i64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<Product>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _id: i64) -> Result<Option<Product>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn search(&self, _keyword: &str) -> Result<Vec<Product>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn create(&self, _product: NewProduct) -> Result<Product, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }
}
