//! LaTeX command to spoken phrase mappings
//!
//! Keys are command names without the leading backslash. A command token is
//! always read whole, so `in`, `int` and `infty` never shadow each other.

use phf::phf_map;

/// Bare command name → spoken phrase (unpadded)
pub static COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    // Greek
    "alpha" => "alpha",
    "beta" => "beta",
    "gamma" => "gamma",
    "Gamma" => "capital gamma",
    "delta" => "delta",
    "Delta" => "capital delta",
    "epsilon" => "epsilon",
    "varepsilon" => "epsilon",
    "zeta" => "zeta",
    "eta" => "eta",
    "theta" => "theta",
    "vartheta" => "theta",
    "Theta" => "capital theta",
    "iota" => "iota",
    "kappa" => "kappa",
    "lambda" => "lambda",
    "Lambda" => "capital lambda",
    "mu" => "mu",
    "nu" => "nu",
    "xi" => "xi",
    "Xi" => "capital xi",
    "pi" => "pi",
    "Pi" => "capital pi",
    "rho" => "rho",
    "sigma" => "sigma",
    "Sigma" => "capital sigma",
    "tau" => "tau",
    "upsilon" => "upsilon",
    "phi" => "phi",
    "varphi" => "phi",
    "Phi" => "capital phi",
    "chi" => "chi",
    "psi" => "psi",
    "Psi" => "capital psi",
    "omega" => "omega",
    "Omega" => "capital omega",

    // Calculus and big operators
    "int" => "integral of",
    "oint" => "contour integral of",
    "nabla" => "del",
    "partial" => "partial derivative of",
    "sum" => "sum of",
    "prod" => "product of",
    "lim" => "limit",
    "infty" => "infinity",

    // Binary operators and relations
    "pm" => "plus or minus",
    "mp" => "minus or plus",
    "times" => "times",
    "cdot" => "dot",
    "div" => "divided by",
    "approx" => "approximately equal to",
    "equiv" => "is equivalent to",
    "neq" => "not equal to",
    "ne" => "not equal to",
    "leq" => "less than or equal to",
    "le" => "less than or equal to",
    "geq" => "greater than or equal to",
    "ge" => "greater than or equal to",
    "propto" => "proportional to",
    "rightarrow" => "approaches",
    "to" => "approaches",
    "Rightarrow" => "implies",
    "implies" => "implies",
    "Leftrightarrow" => "if and only if",
    "iff" => "if and only if",

    // Sets and logic
    "subset" => "is a proper subset of",
    "subseteq" => "is a subset of",
    "in" => "is an element of",
    "notin" => "is not an element of",
    "cap" => "intersection",
    "cup" => "union",
    "emptyset" => "empty set",
    "varnothing" => "empty set",
    "forall" => "for all",
    "exists" => "there exists",
    "neg" => "not",
    "wedge" => "and",
    "land" => "and",
    "vee" => "or",
    "lor" => "or",
    "oplus" => "direct sum",
    "otimes" => "tensor product",
    "angle" => "angle",
    "therefore" => "therefore",
    "because" => "because",

    // Functions
    "sin" => "sine",
    "cos" => "cosine",
    "tan" => "tangent",
    "cot" => "cotangent",
    "sec" => "secant",
    "csc" => "cosecant",
    "log" => "logarithm",
    "ln" => "natural logarithm",
    "exp" => "exponential function",
    "det" => "determinant",

    // Structural commands used without arguments
    "frac" => "fraction",
    "sqrt" => "square root of",

    // Dots and misc
    "hbar" => "h-bar",
    "ldots" => "dots",
    "dots" => "dots",
    "cdots" => "center dots",
    "vdots" => "vertical dots",
    "ddots" => "diagonal dots",

    // Sizing and spacing commands are silent
    "left" => "",
    "right" => "",
    "quad" => "",
    "qquad" => "",
};

/// `name{X}` with a fixed one-letter argument → spoken phrase
pub static ARGUMENT_COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    "mathbb{R}" => "the set of real numbers",
    "mathbb{Z}" => "the set of integers",
    "mathbb{N}" => "the set of natural numbers",
    "mathbb{Q}" => "the set of rational numbers",
    "mathbb{C}" => "the set of complex numbers",
};

/// Commands whose braced/bracketed arguments are rewritten structurally
pub const STRUCTURAL_COMMANDS: &[&str] = &["frac", "sqrt"];

/// Spoken names for function application, `sin(x)` → "sine of x"
pub static FUNCTION_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "sin" => "sine",
    "cos" => "cosine",
    "tan" => "tangent",
    "cot" => "cotangent",
    "sec" => "secant",
    "csc" => "cosecant",
    "log" => "logarithm",
    "ln" => "natural logarithm",
    "exp" => "exponential function",
    "sqrt" => "square root",
    "det" => "determinant",
};

/// Look up a bare command name
pub fn lookup_command(name: &str) -> Option<&'static str> {
    COMMANDS.get(name).copied()
}

/// Look up a command with a one-letter braced argument, e.g. `mathbb`, `'R'`
pub fn lookup_argument_command(name: &str, arg: char) -> Option<&'static str> {
    let key = format!("{}{{{}}}", name, arg);
    ARGUMENT_COMMANDS.get(key.as_str()).copied()
}

/// Whether `name` takes arguments handled by the structural rewriter
pub fn is_structural_command(name: &str) -> bool {
    STRUCTURAL_COMMANDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_commands_are_distinct() {
        assert_eq!(lookup_command("in"), Some("is an element of"));
        assert_eq!(lookup_command("int"), Some("integral of"));
        assert_eq!(lookup_command("infty"), Some("infinity"));
    }

    #[test]
    fn test_argument_commands() {
        assert_eq!(
            lookup_argument_command("mathbb", 'R'),
            Some("the set of real numbers")
        );
        assert_eq!(lookup_argument_command("mathbb", 'X'), None);
        assert_eq!(lookup_argument_command("mathcal", 'R'), None);
    }

    #[test]
    fn test_structural_commands() {
        assert!(is_structural_command("frac"));
        assert!(is_structural_command("sqrt"));
        assert!(!is_structural_command("sum"));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(lookup_command("begin"), None);
        assert_eq!(lookup_command("textbf"), None);
    }
}
