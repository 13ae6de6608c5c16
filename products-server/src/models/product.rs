//! Product records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted product. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Body of `POST /products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
}

/// Body of `GET /products/count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_flat() {
        let product = Product {
            id: 7,
            name: "Widget".into(),
            description: "A small widget".into(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "name": "Widget", "description": "A small widget"})
        );
    }

    #[test]
    fn new_product_requires_both_fields() {
        let missing: Result<NewProduct, _> = serde_json::from_str(r#"{"name": "Widget"}"#);
        assert!(missing.is_err());

        let wrong_type: Result<NewProduct, _> =
            serde_json::from_str(r#"{"name": "Widget", "description": 5}"#);
        assert!(wrong_type.is_err());
    }
}
