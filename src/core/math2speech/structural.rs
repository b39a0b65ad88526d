//! Structural pattern rewriter
//!
//! Composite notations that need more than a table lookup. The list order is
//! significant: derivatives come before every exponent rule, big-O before
//! function application, braced exponents and subscripts before the LaTeX
//! roots and fractions whose arguments hold them, roots before fractions.
//! Exponent and subscript bases may be separated from `^`/`_` by any
//! whitespace, which is how a padded glyph phrase (` alpha ^2`) reaches this
//! stage.

use regex::Captures;

use super::rules::{RewriteRule, Rule};
use crate::data::commands::FUNCTION_NAMES;
use crate::data::numbers::ordinal_str;

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::Rewrite(RewriteRule::computed(
            "derivative",
            r"\bd\^?(\d+)\s*([A-Za-z])\s*/\s*d([A-Za-z])\^?\d+",
            speak_derivative,
        )),
        // `d²x/dt²` after the symbol stage
        Rule::Rewrite(RewriteRule::computed(
            "derivative-spoken-power",
            r"\bd\s+(squared|cubed)\s+([A-Za-z])\s*/\s*d([A-Za-z])\s+(?:squared|cubed)\b",
            speak_spoken_power_derivative,
        )),
        Rule::Rewrite(RewriteRule::new(
            "big-o",
            r"\bO\(([^()]+)\)",
            "big O of ${1}",
        )),
        Rule::Rewrite(RewriteRule::computed(
            "big-operator-limits",
            r"\b(sum|product|integral) of\s*_\s*(?:\{([^{}]*)\}|([^\s{}^]+))\s*\^\s*(?:\{([^{}]*)\}|([^\s{}]+))",
            speak_big_operator_limits,
        )),
        Rule::Rewrite(RewriteRule::computed(
            "limit",
            r"\blimit\s*_\s*\{([^{}]*)\}",
            |caps| format!(" the limit as {} of ", caps[1].trim()),
        )),
        Rule::Rewrite(RewriteRule::new(
            "brace-superscript",
            r"([\p{L}\p{N}]+)\s*\^\{([^{}]*)\}",
            "${1} to the power of ${2}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "brace-subscript",
            r"([\p{L}\p{N}]+)\s*_\{([^{}]*)\}",
            "${1} sub ${2}",
        )),
        Rule::Rewrite(RewriteRule::computed(
            "latex-nth-root",
            r"\\sqrt\s*\[\s*(\d+)\s*\]\s*\{([^{}]*)\}",
            speak_nth_root,
        )),
        Rule::Rewrite(RewriteRule::new(
            "latex-root",
            r"\\sqrt\s*\{([^{}]*)\}",
            " square root of ${1} ",
        )),
        Rule::Rewrite(RewriteRule::new(
            "latex-fraction",
            r"\\frac\s*\{([^{}]*)\}\s*\{([^{}]*)\}",
            " ${1} divided by ${2} ",
        )),
        Rule::Rewrite(RewriteRule::new(
            "bare-superscript",
            r"([\p{L}\p{N}]+)\s*\^([\p{L}\p{N}])",
            "${1} to the power of ${2}",
        )),
        Rule::Rewrite(RewriteRule::new(
            "bare-subscript",
            r"([\p{L}\p{N}]+)\s*_([\p{L}\p{N}])",
            "${1} sub ${2}",
        )),
        Rule::Rewrite(RewriteRule::computed(
            "function-application",
            r"([A-Za-z]+)\(([A-Za-z])\)",
            speak_function_application,
        )),
    ]
}

fn speak_derivative(caps: &Captures) -> String {
    format!(
        "the {} derivative of {} with respect to {}",
        ordinal_str(&caps[1]),
        &caps[2],
        &caps[3]
    )
}

fn speak_spoken_power_derivative(caps: &Captures) -> String {
    let order = if &caps[1] == "cubed" { "third" } else { "second" };
    format!(
        "the {} derivative of {} with respect to {}",
        order, &caps[2], &caps[3]
    )
}

fn speak_big_operator_limits(caps: &Captures) -> String {
    let lower = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
    let upper = caps.get(4).or_else(|| caps.get(5)).map_or("", |m| m.as_str());
    format!(
        " {} from {} to {} of ",
        &caps[1],
        lower.trim(),
        upper.trim()
    )
}

fn speak_nth_root(caps: &Captures) -> String {
    let radicand = &caps[2];
    match &caps[1] {
        "2" => format!(" square root of {} ", radicand),
        "3" => format!(" cube root of {} ", radicand),
        n => format!(" the {} root of {} ", ordinal_str(n), radicand),
    }
}

fn speak_function_application(caps: &Captures) -> String {
    let name = &caps[1];
    let spoken = FUNCTION_NAMES.get(name).copied().unwrap_or(name);
    format!("{} of {}", spoken, &caps[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_stage(input: &str) -> String {
        rules().iter().fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    fn position(name: &str) -> usize {
        rules()
            .iter()
            .position(|rule| rule.name() == name)
            .unwrap_or_else(|| panic!("no rule named {}", name))
    }

    #[test]
    fn test_derivative_before_exponents() {
        assert!(position("derivative") < position("bare-superscript"));
        assert!(position("derivative") < position("brace-superscript"));
        assert!(position("big-o") < position("function-application"));
        assert!(position("latex-root") < position("latex-fraction"));
        assert!(position("brace-superscript") < position("latex-nth-root"));
        assert!(position("brace-subscript") < position("latex-fraction"));
    }

    #[test]
    fn test_caret_derivative() {
        assert_eq!(
            run_stage("d^2x/dt^2"),
            "the second derivative of x with respect to t"
        );
        assert_eq!(
            run_stage("d3y/dx3"),
            "the third derivative of y with respect to x"
        );
    }

    #[test]
    fn test_spoken_power_derivative() {
        assert_eq!(
            run_stage("d squared x/dt squared "),
            "the second derivative of x with respect to t "
        );
    }

    #[test]
    fn test_big_o() {
        assert_eq!(run_stage("O(n log n)"), "big O of n log n");
        assert_eq!(run_stage("O(n)"), "big O of n");
    }

    #[test]
    fn test_big_operator_limits() {
        assert_eq!(
            run_stage(" sum of _{i=1}^{n} i"),
            "  sum from i=1 to n of  i"
        );
        assert_eq!(
            run_stage(" integral of _0^ infinity  f"),
            "  integral from 0 to infinity of   f"
        );
    }

    #[test]
    fn test_limit() {
        assert_eq!(
            run_stage(" limit _{x  approaches  0} f"),
            "  the limit as x  approaches  0 of  f"
        );
    }

    #[test]
    fn test_latex_fraction_and_roots() {
        assert_eq!(run_stage(r"\frac{a}{b}"), " a divided by b ");
        assert_eq!(run_stage(r"\sqrt{x}"), " square root of x ");
        assert_eq!(run_stage(r"\sqrt[3]{x}"), " cube root of x ");
        assert_eq!(run_stage(r"\sqrt[4]{x}"), " the fourth root of x ");
        assert_eq!(
            run_stage(r"\frac{1}{\sqrt{2}}"),
            " 1 divided by  square root of 2  "
        );
    }

    #[test]
    fn test_latex_arguments_with_braced_scripts() {
        assert_eq!(
            run_stage(r"\frac{1}{x^{2}}"),
            " 1 divided by x to the power of 2 "
        );
        assert_eq!(
            run_stage(r"\sqrt{x^{2}+1}"),
            " square root of x to the power of 2+1 "
        );
        assert_eq!(run_stage(r"\frac{a_{1}}{b}"), " a sub 1 divided by b ");
    }

    #[test]
    fn test_superscripts() {
        assert_eq!(run_stage("x^{n+1}"), "x to the power of n+1");
        assert_eq!(run_stage("x^2"), "x to the power of 2");
    }

    #[test]
    fn test_padded_glyph_base() {
        assert_eq!(run_stage(" alpha ^2"), " alpha to the power of 2");
        assert_eq!(run_stage(" theta _{0}"), " theta sub 0");
        assert_eq!(run_stage("x\n^2"), "x to the power of 2");
        assert_eq!(run_stage("x\u{a0}_i"), "x sub i");
    }

    #[test]
    fn test_subscripts() {
        assert_eq!(run_stage("a_{ij}"), "a sub ij");
        assert_eq!(run_stage("x_i"), "x sub i");
    }

    #[test]
    fn test_function_application() {
        assert_eq!(run_stage("f(x)"), "f of x");
        assert_eq!(run_stage("sin(t)"), "sine of t");
        assert_eq!(run_stage("sqrt(y)"), "square root of y");
        // Multi-letter arguments are not function application
        assert_eq!(run_stage("g(xy)"), "g(xy)");
    }
}
