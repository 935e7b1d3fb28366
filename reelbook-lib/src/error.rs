use thiserror::Error;

use reelbook_db::OperationError;

/// Errors that end (or, under a lenient policy, interrupt) a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading the prompt input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage engine rejected a statement
    #[error("Storage error: {0}")]
    Storage(#[from] OperationError),
}

/// Errors while reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
