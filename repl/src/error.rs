//! REPL error types.

use std::io;
use std::path::PathBuf;

use markov_rule::RuleError;
use thiserror::Error;

/// Result type for REPL operations.
pub type ReplResult<T> = Result<T, ReplError>;

/// Errors surfaced by the command line and the REPL.
#[derive(Debug, Error)]
pub enum ReplError {
    /// A file could not be opened or read.
    #[error("can't open file '{path}': {source}")]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// A rule line is malformed.
    #[error(transparent)]
    Format(#[from] RuleError),

    /// A configuration file is malformed.
    #[error("invalid config '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// A command was not understood.
    #[error("invalid command: {message}")]
    InvalidCommand { message: String },

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// A trace record could not be encoded.
    #[error("failed to encode trace: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ReplError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand {
            message: message.into(),
        }
    }
}
