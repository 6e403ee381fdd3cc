//! Rule error types.

use thiserror::Error;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while parsing a rule line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("can't parse rule \"{line}\": missing arrow `->`")]
    MissingArrow { line: String },

    #[error("can't parse rule \"{line}\": empty pattern")]
    EmptyPattern { line: String },

    #[error("can't parse rule \"{line}\": empty replacement")]
    EmptyReplacement { line: String },
}

impl RuleError {
    pub fn missing_arrow(line: impl Into<String>) -> Self {
        Self::MissingArrow { line: line.into() }
    }

    pub fn empty_pattern(line: impl Into<String>) -> Self {
        Self::EmptyPattern { line: line.into() }
    }

    pub fn empty_replacement(line: impl Into<String>) -> Self {
        Self::EmptyReplacement { line: line.into() }
    }

    /// The offending source line.
    pub fn line(&self) -> &str {
        match self {
            Self::MissingArrow { line }
            | Self::EmptyPattern { line }
            | Self::EmptyReplacement { line } => line,
        }
    }
}

/// Errors that can occur while loading a rule set from a stream.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read rule source: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] RuleError),
}
