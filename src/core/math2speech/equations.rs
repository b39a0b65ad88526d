//! Known-equation matcher
//!
//! Famous equations are recognized as a whole and replaced by one fixed
//! sentence. Earlier stages have already spoken glyphs and exponents, so the
//! patterns accept both the raw and the spoken form (`c²`, `c squared`,
//! `c to the power of 2`). Every operator site allows optional whitespace.
//! The sentences contain no operator, caret, slash or underscore, so later
//! stages leave a recognized span alone. A match whose last operand carries
//! on into an exponent, subscript or slash is not the equation and stays as
//! written.

use super::rules::{EquationRule, Rule};

/// A spoken or written square
const SQUARED: &str = r"(?:squared|to\s+the\s+power\s+of\s+2|\^\s*2|²)";

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::Equation(EquationRule::new(
            "energy-mass",
            &format!(r"\bE\s*=\s*m\s*c\s*{}", SQUARED),
            "E equals m c squared",
        )),
        Rule::Equation(EquationRule::new(
            "force-law",
            r"\bF\s*=\s*ma\b",
            "Force equals mass times acceleration",
        )),
        Rule::Equation(EquationRule::new(
            "pythagorean",
            &format!(
                r"\ba\s*{sq}\s*\+\s*b\s*{sq}\s*=\s*c\s*{sq}",
                sq = SQUARED
            ),
            "a squared plus b squared equals c squared",
        )),
        Rule::Equation(EquationRule::new(
            "planck",
            r"\bE\s*=\s*h\s*(?:nu\b|ν)",
            "E equals h nu",
        )),
        Rule::Equation(EquationRule::new(
            "ideal-gas",
            r"\bPV\s*=\s*nRT\b",
            "P V equals n R T",
        )),
        Rule::Equation(EquationRule::new(
            "euler-identity",
            r"\be\s*(?:to\s+the\s+power\s+of\s+i\s*pi\b|\^\s*\{\s*i\s*(?:pi|π)\s*\}|\^\s*\(\s*i\s*(?:pi|π)\s*\))\s*\+\s*1\s*=\s*0\b",
            "e to the power of i pi plus 1 equals 0",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_stage(input: &str) -> String {
        rules().iter().fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    #[test]
    fn test_energy_mass_forms() {
        assert_eq!(run_stage("E = mc squared "), "E equals m c squared ");
        assert_eq!(run_stage("E=mc²"), "E equals m c squared");
        assert_eq!(run_stage("E = mc to the power of 2"), "E equals m c squared");
    }

    #[test]
    fn test_force_law_word_bounded() {
        assert_eq!(
            run_stage("Newton: F = ma."),
            "Newton: Force equals mass times acceleration."
        );
        assert_eq!(run_stage("F = mass"), "F = mass");
        assert_eq!(
            run_stage("F = ma to the power of 2"),
            "F = ma to the power of 2"
        );
        assert_eq!(run_stage("F = ma sub 1"), "F = ma sub 1");
        assert_eq!(run_stage("F = ma/2"), "F = ma/2");
    }

    #[test]
    fn test_pythagorean() {
        assert_eq!(
            run_stage("a squared  + b squared  = c squared "),
            "a squared plus b squared equals c squared "
        );
        assert_eq!(
            run_stage("a to the power of 2 + b to the power of 2 = c to the power of 2"),
            "a squared plus b squared equals c squared"
        );
    }

    #[test]
    fn test_planck_and_ideal_gas() {
        assert_eq!(run_stage("E = h nu "), "E equals h nu ");
        assert_eq!(run_stage("PV=nRT"), "P V equals n R T");
    }

    #[test]
    fn test_euler_identity_forms() {
        let expected = "e to the power of i pi plus 1 equals 0";
        assert_eq!(run_stage("e to the power of i pi  + 1 = 0"), expected);
        assert_eq!(run_stage("e^(i pi ) + 1 = 0"), expected);
        assert_eq!(run_stage("e^{iπ}+1=0"), expected);
    }

    #[test]
    fn test_reordered_terms_not_recognized() {
        assert_eq!(run_stage("mc squared = E"), "mc squared = E");
    }

    #[test]
    fn test_sentences_are_inert() {
        for rule in rules() {
            if let Rule::Equation(eq) = rule {
                assert!(
                    !eq.sentence.contains(['=', '+', '^', '/', '_', '*']),
                    "{} sentence is not inert",
                    eq.name
                );
            }
        }
    }
}
