//! Write operations on the `movies` table.
//!
//! Every statement binds user input as parameters; titles and other fields
//! are never spliced into SQL text.

use reelbook_catalog::Movie;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert a new movie. The `id` on `movie` is ignored; returns the id
/// assigned by SQLite.
pub fn insert_movie(conn: &Connection, movie: &Movie) -> Result<i64, OperationError> {
    let mut stmt = conn.prepare(
        "INSERT INTO movies (title, release_year, director, genre) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        movie.title,
        movie.release_year,
        movie.director,
        movie.genre,
    ])?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted movie '{}' with id {}", movie.title, id);
    Ok(id)
}

/// Delete every movie whose title matches (case-insensitive).
///
/// Returns the number of rows removed; zero means nothing matched.
pub fn delete_movies_by_title(conn: &Connection, title: &str) -> Result<usize, OperationError> {
    let mut stmt = conn.prepare("DELETE FROM movies WHERE LOWER(title) = LOWER(?1)")?;
    let removed = stmt.execute(params![title])?;
    log::debug!("Deleted {} movie(s) titled '{}'", removed, title);
    Ok(removed)
}

/// Overwrite the mutable fields of the movie with `id`.
///
/// Existence is not checked: an unknown id affects zero rows and still
/// returns `Ok(0)`.
pub fn update_movie(
    conn: &Connection,
    id: i64,
    title: &str,
    release_year: i64,
    director: &str,
    genre: &str,
) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "UPDATE movies SET title = ?1, release_year = ?2, director = ?3, genre = ?4
         WHERE id = ?5",
        params![title, release_year, director, genre, id],
    )?;
    log::debug!("Updated movie id {} ({} row(s))", id, changed);
    Ok(changed)
}
