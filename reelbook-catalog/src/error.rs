use thiserror::Error;

/// Errors raised while turning user input into catalog values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Release year was not a whole number
    #[error("Invalid release year: '{0}'")]
    InvalidReleaseYear(String),
}
