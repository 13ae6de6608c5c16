//! Custom Axum extractors
//!
//! Wrap the stock extractors so every rejection becomes a 422
//! [`ApiError::Validation`] with a JSON body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Path parameters whose rejections answer 422
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| ApiError::Validation {
                message: e.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Extract a product id from the path.
///
/// An integer too large for `i64` cannot match any stored id and is
/// reported as not found without touching the store.
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidPath(raw) = ValidPath::<String>::from_request_parts(parts, state).await?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            Err(_) if is_integer(&raw) => Err(ApiError::NotFound {
                resource: "product",
            }),
            Err(_) => Err(ApiError::Validation {
                message: format!("id: '{}' is not a valid integer", raw),
            }),
        }
    }
}

/// Optionally signed run of ASCII digits
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// JSON body whose deserialization failures answer 422
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::Validation {
                message: e.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Query string whose deserialization failures answer 422
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| ApiError::Validation {
                message: e.body_text(),
            })?;
        Ok(Self(value))
    }
}
