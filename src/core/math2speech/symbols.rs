//! Symbol substituter
//!
//! One left-to-right scan over the text; at each position the longest glyph
//! key wins, so `||` is read as a norm and never as two "such that" bars.
//! Replacements are not re-scanned.

use super::rules::{push_padded, Rule};
use crate::data::symbols::lookup_glyph;

pub fn rules() -> Vec<Rule> {
    vec![Rule::SymbolTable]
}

/// Replace every glyph of the symbol table with its padded phrase
pub fn substitute_symbols(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        match lookup_glyph(rest) {
            Some((len, phrase)) => {
                push_padded(&mut out, phrase);
                rest = &rest[len..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}
