//! # mathvox
//!
//! Deterministic math-notation-to-spoken-English converter for speech synthesis.
//!
//! ## Features
//!
//! - **Unicode and LaTeX**: Greek letters, operators, sets, `\frac`, `\sqrt`,
//!   environments and delimiters
//! - **ASCII math**: `a/b`, `x^2`, `x_i`, `<=`, `sqrt(x)`
//! - **Known equations**: famous formulas read as fixed sentences
//! - **Traceable**: inspect the text after every pipeline stage
//! - **Speech orchestration**: persist the text and drive an external
//!   text-to-speech executable, falling back to text when it is missing
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Conversion
//!
//! ```rust
//! use mathvox::math_to_speech;
//!
//! assert_eq!(math_to_speech("x^2 <= y"), "x to the power of 2 less than or equal to y");
//! assert_eq!(math_to_speech(r"\alpha + \beta"), "alpha plus beta");
//! assert_eq!(math_to_speech("E = mc²"), "E equals m c squared");
//! ```
//!
//! ### Per-stage options and tracing
//!
//! ```rust
//! use mathvox::{math_to_speech_traced, math_to_speech_with_options, SpeechOptions, Stage};
//!
//! let opts = SpeechOptions::conservative();
//! assert_eq!(math_to_speech_with_options("and/or", &opts), "and/or");
//!
//! let trace = math_to_speech_traced("α/β", &SpeechOptions::default());
//! assert!(trace.changed_stages().contains(&Stage::Symbols));
//! assert_eq!(trace.output(), "alpha divided by beta");
//! ```

/// Core conversion pipeline
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Text file capabilities and error types
pub mod utils;

/// External speech synthesis orchestration
pub mod synthesis;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion
pub use core::math2speech;
pub use core::math2speech::{ConversionTrace, SpeechOptions, Stage, StageRules};

// Re-export synthesis
pub use synthesis::{
    speak, speak_file, speak_text_only, CommandSynthesizer, Fallback, SpeechOutcome,
    SynthesisConfig, Synthesizer, UnavailableSynthesizer,
};

// Re-export utilities
pub use utils::error::{FileError, SpeechError, SpeechResult, SynthesisError};
pub use utils::files::{MemoryTextFiles, StdTextFiles, TextFiles};

/// Convert math notation to spoken English
///
/// Pure and total: every input yields a string, and repeated calls yield the
/// same string.
pub fn math_to_speech(input: &str) -> String {
    core::convert(input)
}

/// Convert math notation to spoken English, running only the enabled stages
pub fn math_to_speech_with_options(input: &str, options: &SpeechOptions) -> String {
    core::convert_with_options(input, options)
}

/// Convert and keep the text after every enabled stage
pub fn math_to_speech_traced(input: &str, options: &SpeechOptions) -> ConversionTrace {
    core::convert_traced(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_to_speech_greek() {
        assert_eq!(math_to_speech("α β γ"), "alpha beta gamma");
    }

    #[test]
    fn test_math_to_speech_latex_commands() {
        assert_eq!(math_to_speech(r"\alpha + \beta"), "alpha plus beta");
        assert_eq!(
            math_to_speech(r"x \in \mathbb{R}"),
            "x is an element of the set of real numbers"
        );
    }

    #[test]
    fn test_math_to_speech_ascii() {
        assert_eq!(math_to_speech("x^2"), "x to the power of 2");
        assert_eq!(math_to_speech("a/b"), "a divided by b");
        assert_eq!(math_to_speech("x_i"), "x sub i");
    }

    #[test]
    fn test_with_options_conservative() {
        let opts = SpeechOptions::conservative();
        assert_eq!(math_to_speech_with_options("a / b - c", &opts), "a / b - c");
    }

    #[test]
    fn test_traced_matches_plain() {
        let input = r"\frac{a}{b} + x_1";
        let trace = math_to_speech_traced(input, &SpeechOptions::default());
        assert_eq!(trace.output(), math_to_speech(input));
        assert_eq!(trace.input, input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(math_to_speech(""), "");
        assert_eq!(math_to_speech("   \n\t "), "");
    }
}
