//! Error types for the CLI

use std::path::PathBuf;

use core_types::SyntaxError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input is not a valid ES5 script
    #[error("SyntaxError: {0}")]
    Syntax(#[from] SyntaxError),

    /// Input file could not be read
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Tree could not be rendered as JSON
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor failure
    #[error("REPL error: {0}")]
    Repl(String),

    /// Nothing to do with the given arguments
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code: 1 for invalid input, 2 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Syntax(_) => 1,
            _ => 2,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
