//! Markov Rule
//!
//! Rules, rule sets and the rewrite engine for normal Markov algorithms.
//!
//! Responsibilities:
//! - Parse rule lines (`pattern -> replacement`, `pattern ->. replacement`)
//! - Apply the first matching rule of an ordered rule set
//! - Step the engine until no rule matches or a final rule fires

mod engine;
mod error;
mod rule;
mod ruleset;

pub use engine::{run, Engine, Halt, Step, StepSink};
pub use error::{LoadError, RuleError, RuleResult};
pub use rule::{Rule, Token};
pub use ruleset::RuleSet;

/// Separates pattern from replacement.
pub const ARROW: &str = "->";

/// Reserved token for the empty word.
pub const EPSILON: &str = "_";

/// Written directly after the arrow to mark a final rule.
pub const FINAL_MARKER: char = '.';

/// Characters trimmed around rule segments. A source line with none of them
/// is not a rule.
pub const WHITESPACE: &[char] = &[' ', '\t'];
