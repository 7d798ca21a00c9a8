//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One parameterized statement per operation
//! - No check-then-insert; ids come from the database

pub mod posts;

pub use posts::{DbError, PgPostStore, PostStore};
