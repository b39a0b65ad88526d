//! Data layer - Static mappings
//!
//! This module contains all static tables used by the rewrite pipeline:
//! - Unicode glyph phrases
//! - LaTeX command phrases
//! - ASCII operator phrases
//! - Ordinal wording

pub mod commands;
pub mod numbers;
pub mod operators;
pub mod symbols;

// Re-export commonly used items
pub use commands::{
    lookup_argument_command, lookup_command, ARGUMENT_COMMANDS, COMMANDS, FUNCTION_NAMES,
};
pub use numbers::ordinal;
pub use operators::{lookup_operator, OPERATORS};
pub use symbols::{lookup_glyph, GLYPHS};
