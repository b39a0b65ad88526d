//! Command normalizer
//!
//! Flattens math delimiters and matrix/alignment environments, then expands
//! backslash command tokens into padded phrases.

use regex::Captures;

use super::rules::{push_padded, RewriteRule, Rule};
use crate::data::commands::{is_structural_command, lookup_argument_command, lookup_command};

/// Rules of the command stage, in order
pub fn rules() -> Vec<Rule> {
    vec![
        // Matrices first: an enclosing align must not eat their `&` cells
        Rule::Rewrite(RewriteRule::computed(
            "matrix-environment",
            r"(?s)\\begin\{[pbvV]?matrix\}(.*?)\\end\{[pbvV]?matrix\}",
            speak_matrix,
        )),
        Rule::Rewrite(RewriteRule::computed(
            "equation-environment",
            r"(?s)\\begin\{(equation|align)\*?\}(.*?)\\end\{(?:equation|align)\*?\}",
            speak_equation_environment,
        )),
        Rule::Rewrite(RewriteRule::new(
            "display-math",
            r"(?s)\$\$(.*?)\$\$",
            " ${1} ",
        )),
        Rule::Rewrite(RewriteRule::new("inline-math", r"\$(.*?)\$", " ${1} ")),
        Rule::CommandTable,
    ]
}

fn speak_matrix(caps: &Captures) -> String {
    let body = caps[1].replace(r"\\", " next row ").replace('&', " column ");
    format!(" matrix {} ", body)
}

fn speak_equation_environment(caps: &Captures) -> String {
    let body = &caps[2];
    if &caps[1] == "align" {
        format!(" {} ", body.replace('&', "").replace(r"\\", " next line "))
    } else {
        format!(" {} ", body)
    }
}

/// Expand every `\name` token found in the command tables.
///
/// Tokens are read whole, so a shorter command never matches a prefix of a
/// longer one. `\frac` and `\sqrt` directly followed by an argument are left
/// for the structural stage. Unknown commands pass through unchanged.
pub fn expand_commands(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 2);
    let mut rest = input;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let name_len = after.bytes().take_while(u8::is_ascii_alphabetic).count();
        if name_len == 0 {
            rest = expand_control_symbol(&mut out, after);
            continue;
        }

        let name = &after[..name_len];
        let tail = &after[name_len..];

        if let Some((phrase, consumed)) = argument_unit(name, tail) {
            push_padded(&mut out, phrase);
            rest = &tail[consumed..];
        } else if is_structural_command(name) && tail.starts_with(['{', '[']) {
            out.push('\\');
            out.push_str(name);
            rest = tail;
        } else if let Some(phrase) = lookup_command(name) {
            push_padded(&mut out, phrase);
            rest = tail;
        } else {
            out.push('\\');
            out.push_str(name);
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}

/// Backslash followed by a non-letter. Thin spaces become spaces; `\\` and
/// escapes like `\{` are kept as written.
fn expand_control_symbol<'a>(out: &mut String, after: &'a str) -> &'a str {
    match after.chars().next() {
        Some(',' | ';' | ':' | '!') => {
            out.push(' ');
            &after[1..]
        }
        Some(ch) => {
            out.push('\\');
            out.push(ch);
            &after[ch.len_utf8()..]
        }
        None => {
            out.push('\\');
            after
        }
    }
}

/// `{X}` right after the command name, looked up as a whole unit
fn argument_unit(name: &str, tail: &str) -> Option<(&'static str, usize)> {
    let bytes = tail.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'{' && bytes[2] == b'}' && bytes[1].is_ascii_alphabetic() {
        lookup_argument_command(name, bytes[1] as char).map(|phrase| (phrase, 3))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_stage(input: &str) -> String {
        rules().iter().fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    #[test]
    fn test_greek_commands() {
        assert_eq!(expand_commands(r"\alpha+\beta"), " alpha + beta ");
        assert_eq!(expand_commands(r"\Omega"), " capital omega ");
    }

    #[test]
    fn test_whole_token_matching() {
        assert_eq!(expand_commands(r"\infty"), " infinity ");
        assert_eq!(expand_commands(r"\int"), " integral of ");
        assert_eq!(expand_commands(r"x \in A"), "x  is an element of  A");
        assert_eq!(expand_commands(r"\notin"), " is not an element of ");
    }

    #[test]
    fn test_argument_command_as_unit() {
        assert_eq!(expand_commands(r"x \in \mathbb{R}"), "x  is an element of   the set of real numbers ");
        // Unknown argument falls back to passing the command through
        assert_eq!(expand_commands(r"\mathbb{X}"), r"\mathbb{X}");
    }

    #[test]
    fn test_structural_commands_deferred() {
        assert_eq!(expand_commands(r"\frac{a}{b}"), r"\frac{a}{b}");
        assert_eq!(expand_commands(r"\sqrt[3]{x}"), r"\sqrt[3]{x}");
        assert_eq!(expand_commands(r"\frac{\alpha}{2}"), r"\frac{ alpha }{2}");
        // Bare usage still speaks
        assert_eq!(expand_commands(r"\sqrt x"), " square root of  x");
    }

    #[test]
    fn test_unknown_commands_pass_through() {
        assert_eq!(expand_commands(r"\textbf{bold}"), r"\textbf{bold}");
        assert_eq!(expand_commands(r"\{x\}"), r"\{x\}");
        assert_eq!(expand_commands("trailing \\"), "trailing \\");
    }

    #[test]
    fn test_thin_spaces() {
        assert_eq!(expand_commands(r"a\,b\;c"), "a b c");
    }

    #[test]
    fn test_sizing_commands_silent() {
        assert_eq!(expand_commands(r"\left( x \right)"), " ( x  )");
    }

    #[test]
    fn test_inline_and_display_math() {
        assert_eq!(run_stage("cost $x$ here"), "cost  x  here");
        assert_eq!(run_stage("$$\\pi$$"), "  pi  ");
    }

    #[test]
    fn test_matrix_environment() {
        let result = run_stage(r"\begin{pmatrix}a & b \\ c & d\end{pmatrix}");
        assert_eq!(result, " matrix a  column  b  next row  c  column  d ");
    }

    #[test]
    fn test_align_environment() {
        let result = run_stage(r"\begin{align}x &= 1 \\ y &= 2\end{align}");
        assert_eq!(result, " x = 1  next line  y = 2 ");
    }

    #[test]
    fn test_ampersand_outside_environments_untouched() {
        assert_eq!(run_stage("Tom & Jerry"), "Tom & Jerry");
    }
}
