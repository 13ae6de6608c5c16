//! Request and response shapes
//!
//! Nothing here is held beyond a single request; the store owns every
//! persisted product.

pub mod pagination;
pub mod product;

pub use pagination::{Page, PageParams};
pub use product::{NewProduct, Product, ProductCount};
