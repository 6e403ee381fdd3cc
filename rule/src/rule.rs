//! A single substitution rule.

use std::fmt;
use std::str::FromStr;

use crate::error::{RuleError, RuleResult};
use crate::{ARROW, EPSILON, FINAL_MARKER, WHITESPACE};

/// One side of a rule: literal text or the reserved empty word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Non-empty literal text.
    Literal(String),
    /// The empty word, written `_`.
    Epsilon,
}

impl Token {
    /// Parse a rule segment, trimming surrounding spaces and tabs.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(segment: &str) -> Option<Self> {
        let text = trim(segment);
        if text.is_empty() {
            None
        } else if text == EPSILON {
            Some(Self::Epsilon)
        } else {
            Some(Self::Literal(text.to_string()))
        }
    }

    /// The text this token stands for. Epsilon is the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Epsilon => "",
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    fn is_empty_literal(&self) -> bool {
        matches!(self, Self::Literal(text) if text.is_empty())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Epsilon => f.write_str(EPSILON),
        }
    }
}

/// A substitution `pattern -> replacement`, optionally final.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pattern: Token,
    replacement: Token,
    is_final: bool,
}

impl Rule {
    /// Build a rule from tokens.
    ///
    /// An empty literal is rejected on either side: the empty word is only
    /// ever written as [`Token::Epsilon`].
    pub fn new(pattern: Token, replacement: Token, is_final: bool) -> RuleResult<Self> {
        let rule = Self {
            pattern,
            replacement,
            is_final,
        };
        if rule.pattern.is_empty_literal() {
            return Err(RuleError::empty_pattern(rule.to_string()));
        }
        if rule.replacement.is_empty_literal() {
            return Err(RuleError::empty_replacement(rule.to_string()));
        }
        Ok(rule)
    }

    /// Parse a rule line of the form `pattern -> replacement` or
    /// `pattern ->. replacement`.
    ///
    /// The line is split at the first arrow. A `.` directly after the arrow
    /// marks the rule final.
    pub fn parse(line: &str) -> RuleResult<Self> {
        let (left, right) = line
            .split_once(ARROW)
            .ok_or_else(|| RuleError::missing_arrow(line))?;

        let pattern = Token::parse(left).ok_or_else(|| RuleError::empty_pattern(line))?;

        let (is_final, right) = match right.strip_prefix(FINAL_MARKER) {
            Some(rest) => (true, rest),
            None => (false, right),
        };

        let replacement = Token::parse(right).ok_or_else(|| RuleError::empty_replacement(line))?;

        Ok(Self {
            pattern,
            replacement,
            is_final,
        })
    }

    pub fn pattern(&self) -> &Token {
        &self.pattern
    }

    pub fn replacement(&self) -> &Token {
        &self.replacement
    }

    /// Whether firing this rule halts the algorithm.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Try this rule against `word`, rewriting it on a match.
    ///
    /// An epsilon pattern always matches and prepends the replacement.
    /// Otherwise the leftmost occurrence of the pattern is replaced (or
    /// deleted for an epsilon replacement). `word` is left untouched when
    /// this returns `false`.
    pub fn apply(&self, word: &mut String) -> bool {
        let pattern = match &self.pattern {
            Token::Epsilon => {
                word.insert_str(0, self.replacement.as_str());
                return true;
            }
            Token::Literal(text) => text.as_str(),
        };

        match word.find(pattern) {
            Some(pos) => {
                word.replace_range(pos..pos + pattern.len(), self.replacement.as_str());
                true
            }
            None => false,
        }
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_final { " ->. " } else { " -> " };
        write!(f, "{}{}{}", self.pattern, arrow, self.replacement)
    }
}

fn trim(segment: &str) -> &str {
    segment.trim_matches(WHITESPACE)
}
