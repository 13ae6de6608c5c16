//! Product endpoints
//!
//! Each handler issues one store call. Only `GET /products/{id}` treats an
//! empty result as an error; list and search answer `[]`.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ProductId, ValidJson, ValidPath, ValidQuery};
use crate::models::{NewProduct, Page, PageParams, Product, ProductCount};
use crate::state::AppState;

/// GET /products/count - total number of products
async fn count_products(State(state): State<AppState>) -> Result<Json<ProductCount>, ApiError> {
    let count = state.store().count().await?;
    Ok(Json(ProductCount { count }))
}

/// GET /products - products ordered by id, one page at a time
async fn list_products(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let page = Page::from(params);
    let offset = page.offset().ok_or_else(|| ApiError::Internal {
        message: format!(
            "offset overflow for page={} limit={}",
            page.page, page.limit
        ),
    })?;

    let products = state.store().list(page.limit, offset).await?;
    Ok(Json(products))
}

/// GET /products/{id} - a single product
async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "product",
        })?;
    Ok(Json(product))
}

/// GET /products/search/{keyword} - case-insensitive name substring match
async fn search_products(
    State(state): State<AppState>,
    ValidPath(keyword): ValidPath<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store().search(&keyword).await?;
    Ok(Json(products))
}

/// POST /products - insert a product, returning it with its assigned id
async fn create_product(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = state.store().create(req).await?;
    Ok(Json(product))
}

/// Product routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/count", get(count_products))
        .route("/products/search/{keyword}", get(search_products))
        .route("/products/{id}", get(get_product))
}
