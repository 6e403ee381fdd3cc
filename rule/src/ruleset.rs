//! Ordered rule sets.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{LoadError, RuleError, RuleResult};
use crate::rule::Rule;
use crate::WHITESPACE;

/// An ordered list of rules. Earlier rules always take priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from source lines.
    ///
    /// Lines without any space or tab are separators and are skipped, as are
    /// blank lines. Every other line must parse as a rule; the first bad line
    /// aborts the build.
    pub fn from_lines<I, S>(lines: I) -> RuleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for line in lines {
            if let Some(rule) = parse_line(line.as_ref())? {
                rules.push(rule);
            }
        }

        debug!(rules = rules.len(), "rule set built");
        Ok(Self { rules })
    }

    /// Build a rule set from a block of text, one rule per line.
    pub fn parse(source: &str) -> RuleResult<Self> {
        Self::from_lines(source.lines())
    }

    /// Read a rule set from a buffered stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut rules = Vec::new();
        for line in reader.lines() {
            if let Some(rule) = parse_line(&line?)? {
                rules.push(rule);
            }
        }

        debug!(rules = rules.len(), "rule set read");
        Ok(Self { rules })
    }

    /// Append a rule at the lowest priority.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Apply the first matching rule to `word`.
    ///
    /// Returns the rule that fired, or `None` when no rule matches, in which
    /// case `word` is unchanged.
    pub fn apply(&self, word: &mut String) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.apply(word))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

fn parse_line(line: &str) -> RuleResult<Option<Rule>> {
    if !line.contains(WHITESPACE) || line.trim_matches(WHITESPACE).is_empty() {
        trace!(line, "skipping separator line");
        return Ok(None);
    }
    Rule::parse(line).map(Some)
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
