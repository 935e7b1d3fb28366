//! Data model types for the movie library.

use crate::error::CatalogError;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A single movie entry in the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Movie {
    /// Assigned by the database on insert. `0` for records not yet stored.
    pub id: i64,
    pub title: String,
    pub release_year: i64,
    pub director: String,
    pub genre: String,
}

impl Movie {
    /// Build an unsaved movie (`id = 0`).
    pub fn new(
        title: impl Into<String>,
        release_year: i64,
        director: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            release_year,
            director: director.into(),
            genre: genre.into(),
        }
    }

    /// Merge an edit over this record. Fields left as `None` keep their
    /// current value; the `id` never changes.
    pub fn apply_edit(&self, edit: &MovieEdit) -> Movie {
        Movie {
            id: self.id,
            title: edit.title.clone().unwrap_or_else(|| self.title.clone()),
            release_year: edit.release_year.unwrap_or(self.release_year),
            director: edit.director.clone().unwrap_or_else(|| self.director.clone()),
            genre: edit.genre.clone().unwrap_or_else(|| self.genre.clone()),
        }
    }
}

// ── Edits ───────────────────────────────────────────────────────────────────

/// Replacement values collected during an edit. `None` means "keep current".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieEdit {
    pub title: Option<String>,
    pub release_year: Option<i64>,
    pub director: Option<String>,
    pub genre: Option<String>,
}

impl MovieEdit {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.release_year.is_none()
            && self.director.is_none()
            && self.genre.is_none()
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a release year typed by the user (surrounding whitespace ignored).
pub fn parse_release_year(input: &str) -> Result<i64, CatalogError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CatalogError::InvalidReleaseYear(trimmed.to_string()))
}
