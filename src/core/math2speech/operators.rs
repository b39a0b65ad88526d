//! Operator spacer
//!
//! Spells a bare ASCII operator only when it stands alone as a
//! whitespace-delimited token. Hyphenated words, `-5` and `a=b` keep their
//! characters. A token is matched whole, so `<=` never splits into `<` and `=`.

use super::rules::Rule;
use crate::data::operators::lookup_operator;

pub fn rules() -> Vec<Rule> {
    vec![Rule::OperatorTable]
}

/// Replace whitespace-delimited operator tokens with their phrases
pub fn spell_operators(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 2);
    let mut token_start: Option<usize> = None;

    for (i, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = token_start.take() {
                push_token(&mut out, input, start, i);
            }
            out.push(ch);
        } else if token_start.is_none() {
            token_start = Some(i);
        }
    }
    if let Some(start) = token_start {
        push_token(&mut out, input, start, input.len());
    }

    out
}

fn push_token(out: &mut String, input: &str, start: usize, end: usize) {
    let token = &input[start..end];
    // An operator needs whitespace on at least one side
    let isolated = start > 0 || end < input.len();
    match lookup_operator(token) {
        Some(phrase) if isolated => out.push_str(phrase),
        _ => out.push_str(token),
    }
}
