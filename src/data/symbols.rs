//! Unicode glyph to spoken phrase mappings
//!
//! Every key is a single code point except the ASCII norm bars `||`, which
//! must win over the single bar. Lookup is always longest key first, see
//! [`lookup_glyph`].

use lazy_static::lazy_static;
use phf::phf_map;

/// Glyph → spoken phrase (unpadded)
pub static GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    // Greek lowercase
    "α" => "alpha",
    "β" => "beta",
    "γ" => "gamma",
    "δ" => "delta",
    "ε" => "epsilon",
    "ϵ" => "epsilon",
    "ζ" => "zeta",
    "η" => "eta",
    "θ" => "theta",
    "ϑ" => "theta",
    "ι" => "iota",
    "κ" => "kappa",
    "λ" => "lambda",
    "μ" => "mu",
    "ν" => "nu",
    "ξ" => "xi",
    "π" => "pi",
    "ρ" => "rho",
    "σ" => "sigma",
    "τ" => "tau",
    "υ" => "upsilon",
    "φ" => "phi",
    "ϕ" => "phi",
    "χ" => "chi",
    "ψ" => "psi",
    "ω" => "omega",

    // Greek uppercase
    "Γ" => "capital gamma",
    "Δ" => "capital delta",
    "Θ" => "capital theta",
    "Λ" => "capital lambda",
    "Ξ" => "capital xi",
    "Π" => "capital pi",
    "Σ" => "capital sigma",
    "Φ" => "capital phi",
    "Ψ" => "capital psi",
    "Ω" => "capital omega",

    // Calculus and operators
    "∫" => "integral of",
    "∮" => "contour integral of",
    "∇" => "del",
    "∂" => "partial derivative of",
    "±" => "plus or minus",
    "∓" => "minus or plus",
    "×" => "times",
    "·" => "dot",
    "÷" => "divided by",
    "≈" => "approximately equal to",
    "≠" => "not equal to",
    "≤" => "less than or equal to",
    "≥" => "greater than or equal to",
    "≡" => "is equivalent to",
    "→" => "approaches",
    "↑" => "up arrow",
    "↓" => "down arrow",
    "∝" => "proportional to",
    "∑" => "sum of",
    "∏" => "product of",
    "√" => "square root of",
    "∞" => "infinity",
    "∠" => "angle",
    "°" => "degrees",

    // Sets and logic
    "⊆" => "is a subset of",
    "⊂" => "is a proper subset of",
    "∈" => "is an element of",
    "∉" => "is not an element of",
    "∩" => "intersection",
    "∪" => "union",
    "∅" => "empty set",
    "∀" => "for all",
    "∃" => "there exists",
    "¬" => "not",
    "∧" => "and",
    "∨" => "or",
    "⊕" => "direct sum",
    "⊗" => "tensor product",
    "⇒" => "implies",
    "⇔" => "if and only if",
    "ℝ" => "the set of real numbers",
    "ℤ" => "the set of integers",
    "ℕ" => "the set of natural numbers",
    "ℚ" => "the set of rational numbers",
    "ℂ" => "the set of complex numbers",

    // Bars and primes
    "|" => "such that",
    "||" => "norm of",
    "‖" => "norm of",
    "′" => "prime",
    "″" => "double prime",
    "‴" => "triple prime",
    "ℏ" => "h-bar",

    // Superscripts
    "⁰" => "to the power of zero",
    "¹" => "to the first power",
    "²" => "squared",
    "³" => "cubed",
    "⁴" => "to the fourth power",
    "⁵" => "to the fifth power",
    "⁶" => "to the sixth power",
    "⁷" => "to the seventh power",
    "⁸" => "to the eighth power",
    "⁹" => "to the ninth power",
    "ⁿ" => "to the power of n",
    "ⁱ" => "to the power of i",

    // Subscripts
    "₀" => "sub zero",
    "₁" => "sub one",
    "₂" => "sub two",
    "₃" => "sub three",
    "₄" => "sub four",
    "₅" => "sub five",
    "₆" => "sub six",
    "₇" => "sub seven",
    "₈" => "sub eight",
    "₉" => "sub nine",
    "ᵢ" => "sub i",
    "ⱼ" => "sub j",
    "ₖ" => "sub k",
    "ₙ" => "sub n",
    "ₓ" => "sub x",

    // Music
    "♭" => "flat",
    "♯" => "sharp",
    "♮" => "natural",
    "♩" => "quarter note",
    "♪" => "eighth note",
    "♫" => "musical notes",
    "♬" => "musical notes",
    "𝄇" => "repeat",
    "𝄞" => "treble clef",

    "…" => "ellipsis",
};

lazy_static! {
    /// Length in chars of the longest glyph key
    pub static ref MAX_GLYPH_CHARS: usize = GLYPHS
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(1);
}

/// Longest glyph key that prefixes `text`, with its phrase.
///
/// Returns the byte length of the matched key so the caller can advance.
pub fn lookup_glyph(text: &str) -> Option<(usize, &'static str)> {
    for width in (1..=*MAX_GLYPH_CHARS).rev() {
        let Some(end) = byte_len_of_chars(text, width) else {
            continue;
        };
        if let Some(phrase) = GLYPHS.get(&text[..end]) {
            return Some((end, phrase));
        }
    }
    None
}

/// Byte length of the first `chars` chars, if the text has that many
fn byte_len_of_chars(text: &str, chars: usize) -> Option<usize> {
    let mut end = 0;
    let mut count = 0;
    for ch in text.chars().take(chars) {
        end += ch.len_utf8();
        count += 1;
    }
    (count == chars).then_some(end)
}
