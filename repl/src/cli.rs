//! Command line interface.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{RunConfig, TraceFormat};
use crate::error::ReplResult;
use crate::executor::execute_run;
use crate::format::format_rules;
use crate::repl::{load_rules_file, Repl};

/// Run a Markov algorithm and trace every rewrite step.
///
/// With a rule file and a word, prints the rule set and the full trace.
/// With only a rule file, reads words from stdin (or opens the REPL on a
/// terminal). With nothing, opens the REPL.
#[derive(Parser, Debug)]
#[command(name = "markov", version)]
pub struct Cli {
    /// Rule-set file, one rule per line
    pub rules: Option<PathBuf>,

    /// Initial word
    pub word: Option<String>,

    /// Stop after this many rule applications
    #[arg(short = 'n', long)]
    pub max_steps: Option<usize>,

    /// Trace output format
    #[arg(short, long, value_enum)]
    pub format: Option<TraceFormat>,

    /// JSON run configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print only the final step
    #[arg(short, long)]
    pub quiet: bool,

    /// Log engine progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the run configuration: file (or `defaults`), then flags.
    pub fn run_config(&self, defaults: RunConfig) -> ReplResult<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => defaults,
        };
        if self.max_steps.is_some() {
            config.max_steps = self.max_steps;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.quiet |= self.quiet;
        Ok(config)
    }

    /// Dispatch to batch or session mode.
    pub fn run(self) -> ReplResult<()> {
        match (&self.rules, &self.word) {
            (Some(path), Some(word)) => self.run_batch(path, word),
            _ => self.run_session(),
        }
    }

    fn run_batch(&self, path: &Path, word: &str) -> ReplResult<()> {
        let config = self.run_config(RunConfig::default())?;
        let rules = load_rules_file(path)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if !config.quiet && config.format == TraceFormat::Text {
            writeln!(out, "{}", format_rules(&rules))?;
        }
        execute_run(&mut out, &rules, word, &config)?;
        Ok(())
    }

    fn run_session(&self) -> ReplResult<()> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let defaults = if interactive {
            RunConfig::interactive()
        } else {
            RunConfig::default()
        };

        let mut repl = Repl::with_config(self.run_config(defaults)?);
        repl.set_verbose(self.verbose);

        if let Some(path) = &self.rules {
            let summary = repl.load_file(path)?;
            if interactive {
                println!("{}", summary);
            }
        }

        if interactive {
            return repl.interactive();
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.rules.is_some() {
            repl.run_words(stdin.lock(), &mut out)
        } else {
            repl.run_script(stdin.lock(), &mut out)
        }
    }
}
