//! Pagination types
//!
//! Pages are 1-indexed. Values are passed to the store as given: there is
//! no clamping and no positivity check, so `page = 0` or a negative `limit`
//! produce whatever the store makes of them.

use serde::Deserialize;

/// Default page number
const DEFAULT_PAGE: i64 = 1;

/// Default items per page
const DEFAULT_LIMIT: i64 = 10;

/// Resolved pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page number (1-indexed)
    pub page: i64,
    /// Rows per page
    pub limit: i64,
}

impl Page {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// SQL OFFSET value, `(page - 1) * limit`.
    ///
    /// Returns `None` when the product does not fit in an `i64`.
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_sub(1)?.checked_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Query parameters for `GET /products`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
