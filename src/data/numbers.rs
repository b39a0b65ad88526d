//! Number wording used by computed rewrite templates

/// Ordinal word for small counts, `2` → "second", `12` → "12th"
pub fn ordinal(n: u32) -> String {
    let word = match n {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        6 => "sixth",
        7 => "seventh",
        8 => "eighth",
        9 => "ninth",
        10 => "tenth",
        _ => {
            let suffix = match (n % 10, n % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            return format!("{}{}", n, suffix);
        }
    };
    word.to_string()
}

/// Ordinal for a captured digit string; non-numeric captures are kept verbatim
pub fn ordinal_str(digits: &str) -> String {
    match digits.parse::<u32>() {
        Ok(n) => ordinal(n),
        Err(_) => digits.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ordinals() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(2), "second");
        assert_eq!(ordinal(3), "third");
        assert_eq!(ordinal(10), "tenth");
    }

    #[test]
    fn test_large_ordinals() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(100), "100th");
        assert_eq!(ordinal(0), "0th");
    }

    #[test]
    fn test_ordinal_str() {
        assert_eq!(ordinal_str("2"), "second");
        assert_eq!(ordinal_str("n"), "n");
    }
}
