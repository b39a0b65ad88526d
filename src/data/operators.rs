//! ASCII operator mappings for the operator spacer
//!
//! Ordered longest first: a two-character operator is always tried before
//! any one-character operator that prefixes it.

/// ASCII operator → spoken phrase, longest first
pub const OPERATORS: &[(&str, &str)] = &[
    ("==", "equals"),
    ("!=", "not equal to"),
    ("<=", "less than or equal to"),
    (">=", "greater than or equal to"),
    ("=", "equals"),
    ("+", "plus"),
    ("-", "minus"),
    ("*", "times"),
    ("<", "less than"),
    (">", "greater than"),
];

/// Spoken phrase for a token that is exactly an operator
pub fn lookup_operator(token: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(op, _)| *op == token)
        .map(|(_, phrase)| *phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_first_ordering() {
        let position = |needle: &str| OPERATORS.iter().position(|(op, _)| *op == needle);
        for (long, short) in [("==", "="), ("<=", "<"), (">=", ">"), ("<=", "=")] {
            assert!(
                position(long) < position(short),
                "{} must precede {}",
                long,
                short
            );
        }
    }

    #[test]
    fn test_lookup_operator() {
        assert_eq!(lookup_operator("<="), Some("less than or equal to"));
        assert_eq!(lookup_operator("<"), Some("less than"));
        assert_eq!(lookup_operator("=>"), None);
        assert_eq!(lookup_operator("-5"), None);
    }
}
