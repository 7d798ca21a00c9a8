//! Database layer - connection pool, schema and stores
//!
//! # Design Principles
//!
//! - Connection pool for the blog (max 5 connections) - no Arc<Mutex<Connection>>
//! - One parameterized statement per operation, autocommit
//! - Connectivity check opens its own connection per call, never pooled

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod version;

pub use memory::MemoryPostStore;
pub use pool::create_pool;
pub use repos::*;
pub use version::{PgVersionSource, VersionError, VersionSource};
