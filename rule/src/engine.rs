//! Rule execution engine.

use tracing::{debug, trace};

use crate::rule::Rule;
use crate::ruleset::RuleSet;

/// One entry of the rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'r> {
    /// Position in the history. The initial word is step 1.
    pub index: usize,
    /// The word after this step.
    pub word: String,
    /// The rule that fired, `None` for the initial word.
    pub rule: Option<&'r Rule>,
}

impl Step<'_> {
    /// Whether this step fired a final rule.
    pub fn is_final(&self) -> bool {
        self.rule.is_some_and(Rule::is_final)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Halt {
    /// No rule matched the current word.
    Exhausted,
    /// A final rule fired.
    Final,
    /// The caller's step cap was reached while rules still matched.
    StepLimit,
}

impl Halt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Halt::Exhausted => "exhausted",
            Halt::Final => "final",
            Halt::StepLimit => "step-limit",
        }
    }
}

/// Receives steps as the engine produces them.
pub trait StepSink<'r> {
    fn on_step(&mut self, step: Step<'r>);
}

impl<'r> StepSink<'r> for Vec<Step<'r>> {
    fn on_step(&mut self, step: Step<'r>) {
        self.push(step);
    }
}

impl<'r, F> StepSink<'r> for F
where
    F: FnMut(Step<'r>),
{
    fn on_step(&mut self, step: Step<'r>) {
        self(step)
    }
}

/// Drives a rule set against a word until it halts.
///
/// There is no built-in step limit: a rule set that never halts keeps the
/// engine running. Use [`Engine::run_bounded`] or `Iterator::take` to cap it.
#[derive(Debug, Clone)]
pub struct Engine<'r> {
    rules: &'r RuleSet,
    word: String,
    index: usize,
    started: bool,
    halt: Option<Halt>,
}

impl<'r> Engine<'r> {
    /// Create a new engine positioned at the initial word.
    pub fn new(rules: &'r RuleSet, word: impl Into<String>) -> Self {
        Self {
            rules,
            word: word.into(),
            index: 1,
            started: false,
            halt: None,
        }
    }

    /// The current word.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn into_word(self) -> String {
        self.word
    }

    /// Index of the most recent step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The halt reason, once the run is over.
    pub fn halt(&self) -> Option<Halt> {
        self.halt
    }

    pub fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Apply one rule to the current word.
    ///
    /// Returns `None` once the engine has halted.
    pub fn step(&mut self) -> Option<Step<'r>> {
        self.started = true;
        if self.halt.is_some() {
            return None;
        }

        let rules: &'r RuleSet = self.rules;
        let Some(rule) = rules.apply(&mut self.word) else {
            debug!(steps = self.index, word = %self.word, "no rule matches");
            self.halt = Some(Halt::Exhausted);
            return None;
        };

        self.index += 1;
        trace!(index = self.index, word = %self.word, rule = %rule, "rule applied");

        if rule.is_final() {
            debug!(steps = self.index, word = %self.word, "final rule fired");
            self.halt = Some(Halt::Final);
        }

        Some(Step {
            index: self.index,
            word: self.word.clone(),
            rule: Some(rule),
        })
    }

    /// Record [`Halt::Exhausted`] if no rule matches the current word.
    ///
    /// Used when a step cap stops the run, so a rule set that was about to
    /// halt on its own is not reported as capped. The word is not rewritten.
    /// Returns the halt reason, or `None` while rules still match.
    pub fn settle(&mut self) -> Option<Halt> {
        if self.halt.is_some() {
            return self.halt;
        }
        if self.rules.apply(&mut self.word.clone()).is_none() {
            debug!(steps = self.index, word = %self.word, "no rule matches");
            self.halt = Some(Halt::Exhausted);
        } else {
            debug!(steps = self.index, "step limit reached");
        }
        self.halt
    }

    /// Run to termination, feeding every step to `sink`.
    pub fn run<S>(&mut self, sink: &mut S) -> Halt
    where
        S: StepSink<'r> + ?Sized,
    {
        self.run_until(None, sink)
    }

    /// Run for at most `max_steps` rule applications.
    ///
    /// Returns [`Halt::StepLimit`] if the cap is hit before the rule set
    /// halts on its own. The engine can be resumed afterwards.
    pub fn run_bounded<S>(&mut self, max_steps: usize, sink: &mut S) -> Halt
    where
        S: StepSink<'r> + ?Sized,
    {
        self.run_until(Some(max_steps), sink)
    }

    fn run_until<S>(&mut self, limit: Option<usize>, sink: &mut S) -> Halt
    where
        S: StepSink<'r> + ?Sized,
    {
        if let Some(initial) = self.start() {
            sink.on_step(initial);
        }

        let mut applied = 0usize;
        loop {
            if let Some(halt) = self.halt {
                return halt;
            }
            if limit.is_some_and(|max| applied >= max) {
                return self.settle().unwrap_or(Halt::StepLimit);
            }
            if let Some(step) = self.step() {
                sink.on_step(step);
                applied += 1;
            }
        }
    }

    /// The initial step, produced once.
    fn start(&mut self) -> Option<Step<'r>> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(Step {
            index: self.index,
            word: self.word.clone(),
            rule: None,
        })
    }
}

impl<'r> Iterator for Engine<'r> {
    type Item = Step<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.start() {
            Some(initial) => Some(initial),
            None => self.step(),
        }
    }
}

/// Run `rules` against `word` to termination and return the final word.
pub fn run(rules: &RuleSet, word: impl Into<String>) -> (String, Halt) {
    let mut engine = Engine::new(rules, word);
    let halt = engine.run(&mut |_step: Step<'_>| {});
    (engine.into_word(), halt)
}
