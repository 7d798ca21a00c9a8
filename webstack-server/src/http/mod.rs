//! HTTP server layer
//!
//! Axum servers with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - HTML pages for the blog, plain text for the connectivity check

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    blog_router, dbcheck_router, run_blog, run_dbcheck, BlogState, DbCheckState, ServerConfig,
    ServerError,
};
