//! Math notation → spoken English
//!
//! A linear pipeline of seven stages sharing one text buffer. Each stage is an
//! ordered list of [`Rule`]s; each rule consumes the full text and returns the
//! full rewritten text. The rule tables are built once per process and only
//! read afterwards, so conversions are pure and may run on any thread.
//!
//! ## Stage order
//!
//! 1. [`Stage::Commands`] - delimiters, environments, `\commands`
//! 2. [`Stage::Symbols`] - Unicode glyphs, longest match first
//! 3. [`Stage::Structural`] - derivatives, big-O, fractions, exponents
//! 4. [`Stage::Equations`] - famous equations, wholesale
//! 5. [`Stage::Generic`] - `a/b`, `a^b`, `a_b` fallbacks
//! 6. [`Stage::Operators`] - whitespace-delimited ASCII operators
//! 7. [`Stage::Canonicalize`] - whitespace and punctuation, always last

pub mod canonical;
pub mod commands;
pub mod equations;
pub mod generic;
pub mod operators;
pub mod options;
pub mod rules;
pub mod structural;
pub mod symbols;

use std::fmt;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use tracing::trace;

pub use options::SpeechOptions;
pub use rules::{EquationRule, RewriteRule, Rule, Template};

/// A pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Commands,
    Symbols,
    Structural,
    Equations,
    Generic,
    Operators,
    Canonicalize,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 7] = [
        Stage::Commands,
        Stage::Symbols,
        Stage::Structural,
        Stage::Equations,
        Stage::Generic,
        Stage::Operators,
        Stage::Canonicalize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Commands => "commands",
            Stage::Symbols => "symbols",
            Stage::Structural => "structural",
            Stage::Equations => "equations",
            Stage::Generic => "generic",
            Stage::Operators => "operators",
            Stage::Canonicalize => "canonicalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ordered rules of one stage
#[derive(Debug)]
pub struct StageRules {
    pub stage: Stage,
    pub rules: Vec<Rule>,
}

impl StageRules {
    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    /// Position of a named rule within this stage
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == name)
    }
}

lazy_static! {
    static ref PIPELINE: Vec<StageRules> = vec![
        StageRules { stage: Stage::Commands, rules: commands::rules() },
        StageRules { stage: Stage::Symbols, rules: symbols::rules() },
        StageRules { stage: Stage::Structural, rules: structural::rules() },
        StageRules { stage: Stage::Equations, rules: equations::rules() },
        StageRules { stage: Stage::Generic, rules: generic::rules() },
        StageRules { stage: Stage::Operators, rules: operators::rules() },
        StageRules { stage: Stage::Canonicalize, rules: canonical::rules() },
    ];
}

/// The full ordered pipeline
pub fn pipeline() -> &'static [StageRules] {
    &PIPELINE
}

/// Convert with every stage enabled
pub fn convert(input: &str) -> String {
    convert_with_options(input, &SpeechOptions::default())
}

/// Convert, running only the stages enabled in `options`.
///
/// Total: any input, including unbalanced braces, yields a string.
pub fn convert_with_options(input: &str, options: &SpeechOptions) -> String {
    let mut text = input.to_string();
    for stage in pipeline() {
        if !options.is_enabled(stage.stage) {
            continue;
        }
        text = stage.apply(&text);
        trace!(stage = %stage.stage, output = %text, "stage applied");
    }
    text
}

/// Output after each enabled stage, in execution order
#[derive(Debug, Clone)]
pub struct ConversionTrace {
    pub input: String,
    pub stages: IndexMap<Stage, String>,
}

impl ConversionTrace {
    /// Final output (the input itself when every stage is disabled)
    pub fn output(&self) -> &str {
        self.stages
            .last()
            .map(|(_, text)| text.as_str())
            .unwrap_or(&self.input)
    }

    /// Stages whose output differs from their input
    pub fn changed_stages(&self) -> Vec<Stage> {
        let mut previous = self.input.as_str();
        let mut changed = Vec::new();
        for (stage, text) in &self.stages {
            if text != previous {
                changed.push(*stage);
            }
            previous = text;
        }
        changed
    }
}

impl fmt::Display for ConversionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12}: {}", "input", self.input)?;
        for (stage, text) in &self.stages {
            writeln!(f, "{:>12}: {}", stage.name(), text)?;
        }
        Ok(())
    }
}

/// Convert and record the text after every enabled stage
pub fn convert_traced(input: &str, options: &SpeechOptions) -> ConversionTrace {
    let mut stages = IndexMap::new();
    let mut text = input.to_string();
    for stage in pipeline() {
        if !options.is_enabled(stage.stage) {
            continue;
        }
        text = stage.apply(&text);
        stages.insert(stage.stage, text.clone());
    }
    ConversionTrace {
        input: input.to_string(),
        stages,
    }
}
