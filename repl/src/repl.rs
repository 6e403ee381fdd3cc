//! Core REPL state and execution.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use markov_rule::{LoadError, Rule, RuleSet};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::{ReplError, ReplResult};
use crate::executor::execute_run;
use crate::format::{format_rules, help_text};

/// Load a rule set from a file.
///
/// Open and read failures become [`ReplError::SourceUnavailable`]; a bad
/// rule line becomes [`ReplError::Format`]. Nothing is returned on failure.
pub fn load_rules_file(path: &Path) -> ReplResult<RuleSet> {
    let file = File::open(path).map_err(|e| ReplError::source_unavailable(path, e))?;
    let rules = RuleSet::from_reader(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io(source) => ReplError::source_unavailable(path, source),
        LoadError::Format(e) => ReplError::Format(e),
    })?;

    info!(path = %path.display(), rules = rules.len(), "rule set loaded");
    Ok(rules)
}

/// REPL state.
pub struct Repl {
    rules: RuleSet,
    config: RunConfig,
    verbose: bool,
}

impl Repl {
    /// Create a new REPL instance with the interactive step limit.
    pub fn new() -> Self {
        Self::with_config(RunConfig::interactive())
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self {
            rules: RuleSet::new(),
            config,
            verbose: false,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Replace the current rule set.
    pub fn load_rules(&mut self, rules: RuleSet) -> String {
        self.rules = rules;
        let summary = format!("Loaded {} rules", self.rules.len());
        if self.verbose {
            format!("{}\n{}", summary, format_rules(&self.rules).trim_end())
        } else {
            summary
        }
    }

    /// Replace the current rule set with one parsed from `source`.
    pub fn load_source(&mut self, source: &str) -> ReplResult<String> {
        let rules = RuleSet::parse(source)?;
        Ok(self.load_rules(rules))
    }

    /// Replace the current rule set with one read from a file.
    pub fn load_file(&mut self, path: &Path) -> ReplResult<String> {
        let rules = load_rules_file(path)?;
        Ok(self.load_rules(rules))
    }

    /// Execute a command or run a word.
    pub fn execute(&mut self, input: &str) -> ReplResult<String> {
        let trimmed = input.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(String::new());
        }

        let (command, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (trimmed, ""),
        };
        debug!(command, arg, "executing");

        match command {
            "help" | "\\h" => Ok(help_text()),
            "rules" | "\\r" => Ok(format_rules(&self.rules).trim_end().to_string()),
            "\\i" | "load" => {
                if arg.is_empty() {
                    return Err(ReplError::invalid_command("load requires a file path"));
                }
                self.load_file(Path::new(arg))
            }
            "rule" => {
                let rule = Rule::parse(arg)?;
                let output = format!("Added rule {}: {}", self.rules.len() + 1, rule);
                self.rules.push(rule);
                Ok(output)
            }
            "clear" => {
                self.rules = RuleSet::new();
                Ok("Rules cleared".to_string())
            }
            "limit" => self.set_limit(arg),
            "verbose" => {
                self.verbose = !self.verbose;
                Ok(format!("Verbose mode: {}", self.verbose))
            }
            "run" => self.run_word(arg),
            word if arg.is_empty() => self.run_word(word),
            other => Err(ReplError::invalid_command(format!(
                "unknown command '{}', type 'help' for a list",
                other
            ))),
        }
    }

    /// Run a word and return its trace.
    pub fn run_word(&self, word: &str) -> ReplResult<String> {
        let mut out = Vec::new();
        execute_run(&mut out, &self.rules, word, &self.config)?;
        Ok(String::from_utf8_lossy(&out).trim_end().to_string())
    }

    /// Treat every non-empty input line as a word and trace it.
    pub fn run_words<R, W>(&self, input: R, out: &mut W) -> ReplResult<()>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        for line in input.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            execute_run(out, &self.rules, word, &self.config)?;
        }
        Ok(())
    }

    /// Run a script of REPL commands. Failing commands are reported and skipped.
    pub fn run_script<R, W>(&mut self, input: R, out: &mut W) -> ReplResult<()>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        for line in input.lines() {
            let line = line?;
            if matches!(line.trim(), "quit" | "exit" | "\\q") {
                break;
            }
            match self.execute(&line) {
                Ok(output) if output.is_empty() => {}
                Ok(output) => writeln!(out, "{}", output)?,
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Ok(())
    }

    /// Run the interactive REPL.
    pub fn interactive(&mut self) -> ReplResult<()> {
        println!("Markov REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands, 'quit' to exit");
        println!();

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("markov> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }

            match line.trim() {
                "quit" | "exit" | "\\q" => break,
                input => match self.execute(input) {
                    Ok(output) if output.is_empty() => {}
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                },
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn set_limit(&mut self, arg: &str) -> ReplResult<String> {
        match arg {
            "" => {}
            "off" | "none" => self.config.max_steps = None,
            n => {
                let max = n.parse().map_err(|_| {
                    ReplError::invalid_command(format!(
                        "limit expects a number or 'off', got '{}'",
                        n
                    ))
                })?;
                self.config.max_steps = Some(max);
            }
        }

        Ok(match self.config.max_steps {
            Some(max) => format!("Step limit: {}", max),
            None => "Step limit: off".to_string(),
        })
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
