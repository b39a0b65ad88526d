//! Rule variants of the rewrite pipeline
//!
//! Every stage is an ordered list of [`Rule`]s. Table-driven rules dispatch to
//! the scanner of their stage; regex rules carry their own pattern and
//! replacement template.

use regex::{Captures, Regex};

use super::{canonical, commands, operators, symbols};

/// How a regex rule builds its replacement
#[derive(Clone, Copy)]
pub enum Template {
    /// `${1}`-style template referencing captures by position
    Positional(&'static str),
    /// Replacement computed from the captures
    Computed(fn(&Captures) -> String),
}

/// A named regex rewrite
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub template: Template,
}

impl RewriteRule {
    /// Positional-template rule. Panics on an invalid pattern, which is a
    /// programming error in the static rule lists.
    pub fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            template: Template::Positional(template),
        }
    }

    pub fn computed(name: &'static str, pattern: &str, build: fn(&Captures) -> String) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            template: Template::Computed(build),
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self.template {
            Template::Positional(template) => {
                self.pattern.replace_all(input, template).into_owned()
            }
            Template::Computed(build) => self
                .pattern
                .replace_all(input, |caps: &Captures| build(caps))
                .into_owned(),
        }
    }
}

/// Text that continues an equation's last operand. A match followed by it is
/// part of a longer expression and is left alone.
const CONTINUATION: &str = r"\s*(?:[\^_/]|(?:to\s+the\s+power\s+of|sub)\b)";

/// A famous equation recognized as a whole and replaced by a fixed sentence
pub struct EquationRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub sentence: &'static str,
}

impl EquationRule {
    pub fn new(name: &'static str, pattern: &str, sentence: &'static str) -> Self {
        Self {
            name,
            pattern: compile(name, &format!("(?:{})(?P<tail>{})?", pattern, CONTINUATION)),
            sentence,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, |caps: &Captures| {
                if caps.name("tail").is_some() {
                    caps[0].to_string()
                } else {
                    self.sentence.to_string()
                }
            })
            .into_owned()
    }
}

/// One step of a pipeline stage
pub enum Rule {
    /// Backslash command expansion against the command table
    CommandTable,
    /// Longest-match glyph substitution against the symbol table
    SymbolTable,
    /// Regex rewrite
    Rewrite(RewriteRule),
    /// Whole-equation recognition
    Equation(EquationRule),
    /// Whitespace-delimited ASCII operator spelling
    OperatorTable,
    /// Whitespace and punctuation canonicalization
    Canonicalize,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::CommandTable => "command-table",
            Rule::SymbolTable => "symbol-table",
            Rule::Rewrite(rule) => rule.name,
            Rule::Equation(rule) => rule.name,
            Rule::OperatorTable => "operator-table",
            Rule::Canonicalize => "canonicalize",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Rule::CommandTable => commands::expand_commands(input),
            Rule::SymbolTable => symbols::substitute_symbols(input),
            Rule::Rewrite(rule) => rule.apply(input),
            Rule::Equation(rule) => rule.apply(input),
            Rule::OperatorTable => operators::spell_operators(input),
            Rule::Canonicalize => canonical::canonicalize(input),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule({})", self.name())
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern for rule '{}': {}", name, e))
}

/// Push `phrase` surrounded by single spaces; empty phrases leave one space
pub(crate) fn push_padded(out: &mut String, phrase: &str) {
    out.push(' ');
    if !phrase.is_empty() {
        out.push_str(phrase);
        out.push(' ');
    }
}
