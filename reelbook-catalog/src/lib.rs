//! Movie record model and input parsing.
//!
//! This crate defines the data model for the movie library without any
//! database dependencies. Consumers pass these types to `reelbook-db` for
//! persistence.

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::*;
