//! Output formatting utilities for the REPL.

use markov_rule::{Halt, RuleSet, Step};
use serde::Serialize;

/// Render a rule set as a bracketed listing.
///
/// ```text
/// ╭
/// │ ab -> _
/// ┤ a -> b
/// ╰
/// ```
///
/// The middle rule carries the `┤` tick.
pub fn format_rules(rules: &RuleSet) -> String {
    let middle = rules.len() / 2;
    let mut output = String::from("╭\n");
    for (i, rule) in rules.iter().enumerate() {
        let bracket = if i == middle { "┤ " } else { "│ " };
        output.push_str(bracket);
        output.push_str(&rule.to_string());
        output.push('\n');
    }
    output.push_str("╰\n");
    output
}

/// Format a step as a numbered trace line, e.g. `   2: b [a -> b]`.
pub fn format_step(step: &Step<'_>) -> String {
    match step.rule {
        Some(rule) => format!("{:>4}: {} [{}]", step.index, step.word, rule),
        None => format!("{:>4}: {}", step.index, step.word),
    }
}

/// A step as written in JSON traces.
#[derive(Debug, Serialize)]
pub struct StepRecord<'a> {
    pub index: usize,
    pub word: &'a str,
    pub rule: Option<String>,
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl<'a> From<&'a Step<'_>> for StepRecord<'a> {
    fn from(step: &'a Step<'_>) -> Self {
        Self {
            index: step.index,
            word: &step.word,
            rule: step.rule.map(|r| r.to_string()),
            is_final: step.is_final(),
        }
    }
}

/// The closing line of a JSON trace.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub halt: &'static str,
    pub steps: usize,
    pub word: &'a str,
}

/// Format a step as a single JSON line.
pub fn format_step_json(step: &Step<'_>) -> serde_json::Result<String> {
    serde_json::to_string(&StepRecord::from(step))
}

/// Format the end of a JSON trace.
pub fn format_summary_json(halt: Halt, steps: usize, word: &str) -> serde_json::Result<String> {
    serde_json::to_string(&RunSummary {
        halt: halt.as_str(),
        steps,
        word,
    })
}

/// Help text for the interactive prompt.
pub fn help_text() -> String {
    [
        "Markov REPL Commands:",
        "  \\i <file>      Load a rule-set file",
        "  rule <rule>    Append a rule, e.g. `rule ab -> _`",
        "  clear          Remove all rules",
        "  rules, \\r      Show the rule set",
        "  limit <n|off>  Set or clear the step limit",
        "  run <word>     Run the rule set on a word",
        "  <word>         Same as run <word>",
        "  verbose        Toggle verbose mode",
        "  help, \\h       Show this help",
        "  quit, \\q       Exit",
        "",
        "Rule syntax:",
        "  pattern -> replacement    rewrite the leftmost pattern",
        "  pattern ->. replacement   rewrite and stop",
        "  _                         the empty word",
    ]
    .join("\n")
}

/// Print help information.
pub fn print_help() {
    println!("{}", help_text());
}
