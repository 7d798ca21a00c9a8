//! Command implementations for the webstack CLI

pub mod blog;
pub mod dbcheck;

pub use blog::run_blog;
pub use dbcheck::run_dbcheck;
