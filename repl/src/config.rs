//! Run configuration.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ReplError, ReplResult};

/// Step cap applied by the interactive REPL unless changed with `limit`.
pub const INTERACTIVE_STEP_LIMIT: usize = 1_000;

/// How traces are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    /// Numbered lines, one per step.
    #[default]
    Text,
    /// One JSON object per step.
    Json,
}

/// Settings for running a word through a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Stop after this many rule applications. `None` runs until the rule set halts.
    pub max_steps: Option<usize>,
    pub format: TraceFormat,
    /// Print only the last step.
    pub quiet: bool,
}

impl RunConfig {
    /// Defaults for interactive use, where a runaway rule set must not hang the prompt.
    pub fn interactive() -> Self {
        Self {
            max_steps: Some(INTERACTIVE_STEP_LIMIT),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> ReplResult<Self> {
        let source =
            fs::read_to_string(path).map_err(|e| ReplError::source_unavailable(path, e))?;
        Self::from_json(&source).map_err(|e| ReplError::config(path, e.to_string()))
    }
}
