//! webstack-server: HTTP services backed by PostgreSQL
//!
//! - blog: list and create posts
//! - dbcheck: report the database server version, or why it can't be read

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{FailureStatus, PgSettings};
pub use http::{ServerConfig, ServerError};
