//! Whitespace and punctuation canonicalizer, always the last stage

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::Rule;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCTUATION: Regex = Regex::new(r"\s([,.;:!?])").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![Rule::Canonicalize]
}

/// Collapse whitespace runs, drop the space before punctuation, trim
pub fn canonicalize(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    let tightened = SPACE_BEFORE_PUNCTUATION.replace_all(&collapsed, "$1");
    tightened.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(canonicalize("  a \n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn test_space_before_punctuation() {
        assert_eq!(canonicalize("x , y ; z !"), "x, y; z!");
        assert_eq!(canonicalize("end  ."), "end.");
    }

    #[test]
    fn test_idempotent() {
        let once = canonicalize(" a ,  b . ");
        assert_eq!(canonicalize(&once), once);
    }
}
