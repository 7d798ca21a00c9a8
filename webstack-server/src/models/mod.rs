//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod validation;

pub use post::{NewPost, Post};
pub use validation::ValidationError;
