//! Caller configuration for the conversion pipeline

use super::Stage;

/// Which pipeline stages run.
///
/// Stages never reorder; disabling one simply passes its input through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    /// Delimiters, environments and backslash commands
    /// Default: true
    pub commands: bool,

    /// Unicode glyphs
    /// Default: true
    pub symbols: bool,

    /// Derivatives, big-O, LaTeX fractions/roots, exponents, function application
    /// Default: true
    pub structural: bool,

    /// Famous equations rewritten wholesale
    /// Default: true
    pub equations: bool,

    /// Generic `a/b`, `sqrt(a)`, `a^b`, `a_b` fallbacks
    /// Default: true
    pub generic: bool,

    /// Whitespace-delimited `=`, `+`, `-`, `*` and relational operators
    /// Default: true
    pub operators: bool,

    /// Final whitespace and punctuation cleanup
    /// Default: true
    pub canonicalize: bool,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            commands: true,
            symbols: true,
            structural: true,
            equations: true,
            generic: true,
            operators: true,
            canonicalize: true,
        }
    }
}

impl SpeechOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the stages with a known false-positive surface (slashes in
    /// prose, dashes between words)
    pub fn conservative() -> Self {
        Self {
            generic: false,
            operators: false,
            ..Self::default()
        }
    }

    /// Only speak commands and glyphs; ASCII-math is left as written
    pub fn glyphs_only() -> Self {
        Self {
            commands: true,
            symbols: true,
            structural: false,
            equations: false,
            generic: false,
            operators: false,
            canonicalize: true,
        }
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Commands => self.commands,
            Stage::Symbols => self.symbols,
            Stage::Structural => self.structural,
            Stage::Equations => self.equations,
            Stage::Generic => self.generic,
            Stage::Operators => self.operators,
            Stage::Canonicalize => self.canonicalize,
        }
    }

    /// Builder-style toggle for a single stage
    pub fn with_stage(mut self, stage: Stage, enabled: bool) -> Self {
        let flag = match stage {
            Stage::Commands => &mut self.commands,
            Stage::Symbols => &mut self.symbols,
            Stage::Structural => &mut self.structural,
            Stage::Equations => &mut self.equations,
            Stage::Generic => &mut self.generic,
            Stage::Operators => &mut self.operators,
            Stage::Canonicalize => &mut self.canonicalize,
        };
        *flag = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let opts = SpeechOptions::default();
        assert!(Stage::ALL.iter().all(|&stage| opts.is_enabled(stage)));
    }

    #[test]
    fn test_conservative_preset() {
        let opts = SpeechOptions::conservative();
        assert!(!opts.is_enabled(Stage::Generic));
        assert!(!opts.is_enabled(Stage::Operators));
        assert!(opts.is_enabled(Stage::Equations));
    }

    #[test]
    fn test_glyphs_only_preset() {
        let opts = SpeechOptions::glyphs_only();
        assert!(opts.commands && opts.symbols && opts.canonicalize);
        assert!(!opts.structural);
    }

    #[test]
    fn test_with_stage() {
        let opts = SpeechOptions::new().with_stage(Stage::Symbols, false);
        assert!(!opts.is_enabled(Stage::Symbols));
        assert!(opts.is_enabled(Stage::Commands));
    }
}
