//! Route groups, merged by [`crate::http::server::build_router`]

pub mod products;
pub mod root;
