//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ScenarioError, ScenarioResult};
use crate::runner::Runner;

/// One input word with its assertion.
#[derive(Debug)]
pub struct Run {
    pub word: String,
    pub assertion: Assertion,
}

/// A complete test scenario: one rule set, several input words.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the rules file.
    rules_path: Option<PathBuf>,
    /// Inline rule source, used instead of a file when set.
    source: Option<String>,
    /// Cap on rule applications per run.
    step_limit: Option<usize>,
    runs: Vec<Run>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules_path: None,
            source: None,
            step_limit: None,
            runs: Vec::new(),
            base_path: demos_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the rules file path (relative to demos/).
    pub fn rules(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = Some(path.into());
        self
    }

    /// Use inline rule text instead of a file.
    pub fn rules_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Stop every run after `n` rule applications.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.step_limit = Some(n);
        self
    }

    /// Add an input word with an assertion on its run.
    pub fn input<F>(mut self, word: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.runs.push(Run {
            word: word.into(),
            assertion,
        });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self).run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Get the rules path (resolved).
    pub fn rules_path(&self) -> ScenarioResult<PathBuf> {
        match &self.rules_path {
            Some(p) => Ok(self.resolve_path(p)),
            None => Err(ScenarioError::missing_rules(&self.name)),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// Locate the `demos/` directory at the workspace root.
pub fn demos_root() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        // tests -> workspace root
        if let Some(workspace) = Path::new(&manifest_dir).parent() {
            let demos = workspace.join("demos");
            if demos.exists() {
                return demos;
            }
        }
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    for dir in [Some(cwd.as_path()), cwd.parent()].into_iter().flatten() {
        let demos = dir.join("demos");
        if demos.exists() {
            return demos;
        }
    }

    PathBuf::from("demos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .rules("sort_ab.mark")
            .max_steps(10)
            .input("ba", |a| a.final_word("ab"))
            .input("bba", |a| a.final_word("abb"));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.step_limit(), Some(10));
        assert_eq!(scenario.runs().len(), 2);
        assert_eq!(scenario.runs()[1].word, "bba");
        assert!(scenario.rules_path().unwrap().ends_with("sort_ab.mark"));
    }

    #[test]
    fn test_missing_rules_is_an_error() {
        let err = Scenario::new("nothing")
            .input("a", |a| a)
            .run()
            .unwrap_err();

        assert!(matches!(err, ScenarioError::MissingRules { .. }));
    }
}
