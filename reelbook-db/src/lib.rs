//! SQLite persistence layer for the movie library.
//!
//! Provides schema creation, write operations, and title lookups
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{delete_movies_by_title, insert_movie, update_movie, OperationError};
pub use queries::{count_movies, find_movie_by_title};
pub use rusqlite::Connection;
pub use schema::{open_database, open_memory, SchemaError};
