//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Named exercise is not in the catalog
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),

    /// An exercise's transcript diverged from its expected lines
    #[error("transcript mismatch in '{name}': {reason}")]
    TranscriptMismatch {
        /// Exercise name
        name: String,
        /// First diverging line
        reason: String,
    },

    /// Report serialization error
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("readline error: {0}")]
    Readline(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
