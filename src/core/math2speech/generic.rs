//! Generic fraction, root, power and subscript normalizer
//!
//! Fallback ASCII-math rules over identifier tokens (letters and digits).
//! The slash rule runs twice, tight then spaced, and fires on anything that
//! looks like `word/word`, URL paths included.

use super::rules::{RewriteRule, Rule};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::Rewrite(RewriteRule::new(
            "fraction-tight",
            r"([\p{L}\p{N}]+)/([\p{L}\p{N}]+)",
            "${1} divided by ${2}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "fraction-spaced",
            r"([\p{L}\p{N}]+)\s*/\s*([\p{L}\p{N}]+)",
            "${1} divided by ${2}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "ascii-root",
            r"\bsqrt\s*\(([^()]*)\)",
            "square root of ${1}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "power",
            r"([\p{L}\p{N}]+)\s*\^([\p{L}\p{N}]+)",
            "${1} to the power of ${2}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "subscript",
            r"([\p{L}\p{N}]+)\s*_([\p{L}\p{N}]+)",
            "${1} sub ${2}",
        )),
    ]
}
