//! Running words through a rule set.

use std::io::Write;

use markov_rule::{Engine, Halt, RuleSet, Step};

use crate::config::{RunConfig, TraceFormat};
use crate::error::ReplResult;
use crate::format::{format_step, format_step_json, format_summary_json};

/// Outcome of a traced run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub halt: Halt,
    /// Index of the last step.
    pub steps: usize,
    pub word: String,
}

/// Run `word` through `rules`, writing the trace to `out` as it is produced.
///
/// Respects the step cap and output settings of `config`.
pub fn execute_run<W>(
    out: &mut W,
    rules: &RuleSet,
    word: &str,
    config: &RunConfig,
) -> ReplResult<RunOutcome>
where
    W: Write + ?Sized,
{
    let mut engine = Engine::new(rules, word);
    // Initial word plus at most `max_steps` applications.
    let budget = config.max_steps.map_or(usize::MAX, |max| max.saturating_add(1));

    let mut last: Option<Step<'_>> = None;
    for step in engine.by_ref().take(budget) {
        if !config.quiet {
            write_step(out, &step, config.format)?;
        }
        last = Some(step);
    }

    // The budget may run out on the step that leaves nothing to match.
    let halt = engine.settle().unwrap_or(Halt::StepLimit);
    if config.quiet {
        if let Some(step) = &last {
            write_step(out, step, config.format)?;
        }
    }

    match config.format {
        TraceFormat::Text if halt == Halt::StepLimit => {
            writeln!(out, "stopped after {} steps", engine.index())?;
        }
        TraceFormat::Text => {}
        TraceFormat::Json => {
            writeln!(out, "{}", format_summary_json(halt, engine.index(), engine.word())?)?;
        }
    }

    Ok(RunOutcome {
        halt,
        steps: engine.index(),
        word: engine.into_word(),
    })
}

fn write_step<W>(out: &mut W, step: &Step<'_>, format: TraceFormat) -> ReplResult<()>
where
    W: Write + ?Sized,
{
    match format {
        TraceFormat::Text => writeln!(out, "{}", format_step(step))?,
        TraceFormat::Json => writeln!(out, "{}", format_step_json(step)?)?,
    }
    Ok(())
}
