//! Read queries for the movie database.

use reelbook_catalog::Movie;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::operations::OperationError;

/// Find a movie by title (case-insensitive).
///
/// Titles are not unique; when several rows match, the one with the lowest
/// id wins.
pub fn find_movie_by_title(
    conn: &Connection,
    title: &str,
) -> Result<Option<Movie>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, release_year, director, genre
         FROM movies WHERE LOWER(title) = LOWER(?1)
         ORDER BY id LIMIT 1",
    )?;
    stmt.query_row(params![title], row_to_movie)
        .optional()
        .map_err(Into::into)
}

/// Total number of stored movies.
pub fn count_movies(conn: &Connection) -> Result<i64, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    Ok(count)
}

fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
        director: row.get(3)?,
        genre: row.get(4)?,
    })
}
