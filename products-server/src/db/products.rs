//! Product store
//!
//! One method per SQL statement:
//! - list: ORDER BY id with LIMIT/OFFSET taken verbatim from the request
//! - search: `name ILIKE '%keyword%'`, pattern characters pass through
//! - create: INSERT ... RETURNING so the assigned id comes back in one trip

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewProduct, Product};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("database URL not configured")]
    NotConfigured,
}

/// Operations the HTTP handlers issue against the store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Liveness probe (`SELECT 1`).
    async fn ping(&self) -> Result<(), DbError>;

    /// Total number of rows in `products`.
    async fn count(&self) -> Result<i64, DbError>;

    /// Products ordered by id, skipping `offset` rows and returning at most
    /// `limit`.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DbError>;

    /// Single product by id, `None` when no row matches.
    async fn get(&self, id: i64) -> Result<Option<Product>, DbError>;

    /// Products whose name contains `keyword`, ignoring case.
    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DbError>;

    /// Insert a product and return it with its assigned id.
    async fn create(&self, product: NewProduct) -> Result<Product, DbError>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description
            FROM products
            WHERE name ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(format!("%{keyword}%"))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = created.id, "Product created");
        Ok(created)
    }
}
