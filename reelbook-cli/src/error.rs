use thiserror::Error;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(String),

    /// The interactive session ended with an error
    #[error("{0}")]
    Session(#[from] reelbook_lib::SessionError),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}
