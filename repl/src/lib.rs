//! Markov REPL library - command line and Read-Eval-Print-Loop for Markov algorithms.
//!
//! It is split into modules for better maintainability:
//!
//! - `cli`: Argument parsing and batch/session dispatch
//! - `config`: Run configuration (step cap, trace format)
//! - `repl`: Core REPL state and execution
//! - `executor`: Traced runs of a word through a rule set
//! - `format`: Output formatting utilities

mod cli;
mod config;
mod error;
mod executor;
mod format;
mod repl;

pub use cli::Cli;
pub use config::{RunConfig, TraceFormat, INTERACTIVE_STEP_LIMIT};
pub use error::{ReplError, ReplResult};
pub use executor::{execute_run, RunOutcome};
pub use format::{
    format_rules, format_step, format_step_json, format_summary_json, help_text, print_help,
    RunSummary, StepRecord,
};
pub use repl::{load_rules_file, Repl};
