//! Speech synthesis orchestration
//!
//! Converts text with the math2speech pipeline, persists the converted text,
//! then hands it to an external synthesizer. Every path persists the text
//! first, so a missing or failing synthesizer never loses the conversion.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use mathvox::synthesis::{speak, SpeechOutcome, UnavailableSynthesizer};
//! use mathvox::{MemoryTextFiles, SpeechOptions};
//!
//! let files = MemoryTextFiles::new();
//! let outcome = speak(
//!     "E = mc²",
//!     Path::new("out/speech.wav"),
//!     &files,
//!     &UnavailableSynthesizer::new("f5-tts_infer-cli"),
//!     &SpeechOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(matches!(outcome, SpeechOutcome::TextOnly { .. }));
//! assert_eq!(files.get("out/speech.txt").as_deref(), Some("E equals m c squared"));
//! ```

pub mod command;
pub mod config;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::math2speech::{convert_with_options, SpeechOptions};
use crate::utils::error::{SpeechResult, SynthesisError};
use crate::utils::files::{text_companion_path, TextFiles};

pub use command::CommandSynthesizer;
pub use config::SynthesisConfig;

/// An external text-to-speech engine
pub trait Synthesizer: Send + Sync {
    /// Check that the engine can be invoked at all
    fn probe(&self) -> Result<(), SynthesisError>;

    /// Render `text` to audio at `output`, returning the written path
    fn synthesize(&self, text: &str, output: &Path) -> Result<PathBuf, SynthesisError>;
}

/// Always unavailable (for text-only environments and tests)
#[derive(Debug, Clone)]
pub struct UnavailableSynthesizer {
    executable: String,
}

impl UnavailableSynthesizer {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Synthesizer for UnavailableSynthesizer {
    fn probe(&self) -> Result<(), SynthesisError> {
        Err(SynthesisError::NotFound {
            executable: self.executable.clone(),
        })
    }

    fn synthesize(&self, _text: &str, _output: &Path) -> Result<PathBuf, SynthesisError> {
        self.probe().map(|_| PathBuf::new())
    }
}

/// Why audio was not produced
#[derive(Debug)]
pub enum Fallback {
    /// The synthesizer could not be probed; synthesis was not attempted
    Unavailable(SynthesisError),
    /// The synthesizer ran and failed
    SynthesisFailed(SynthesisError),
}

impl Fallback {
    pub fn error(&self) -> &SynthesisError {
        match self {
            Fallback::Unavailable(err) | Fallback::SynthesisFailed(err) => err,
        }
    }
}

/// Result of one speak invocation
#[derive(Debug)]
pub enum SpeechOutcome {
    /// Audio was produced; the converted text was saved alongside
    Audio {
        audio_path: PathBuf,
        text_path: PathBuf,
        text: String,
    },
    /// Only the converted text was saved. `reason` is `None` when text-only
    /// output was requested.
    TextOnly {
        text_path: PathBuf,
        text: String,
        reason: Option<Fallback>,
    },
}

impl SpeechOutcome {
    pub fn text_path(&self) -> &Path {
        match self {
            SpeechOutcome::Audio { text_path, .. } | SpeechOutcome::TextOnly { text_path, .. } => {
                text_path
            }
        }
    }

    pub fn converted_text(&self) -> &str {
        match self {
            SpeechOutcome::Audio { text, .. } | SpeechOutcome::TextOnly { text, .. } => text,
        }
    }

    pub fn audio_path(&self) -> Option<&Path> {
        match self {
            SpeechOutcome::Audio { audio_path, .. } => Some(audio_path),
            SpeechOutcome::TextOnly { .. } => None,
        }
    }

    /// An unavailable synthesizer is handled gracefully; a synthesizer that
    /// ran and failed is not.
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            SpeechOutcome::TextOnly {
                reason: Some(Fallback::SynthesisFailed(_)),
                ..
            }
        )
    }
}

/// Convert `text` and save it to `text_path`, returning the converted text
pub fn convert_to_file(
    text: &str,
    text_path: &Path,
    files: &dyn TextFiles,
    options: &SpeechOptions,
) -> SpeechResult<String> {
    let converted = convert_with_options(text, options);
    files.write_text(text_path, &converted)?;
    info!(path = %text_path.display(), "converted text saved");
    Ok(converted)
}

/// Convert `text` without synthesizing; the text lands next to `audio_path`
pub fn speak_text_only(
    text: &str,
    audio_path: &Path,
    files: &dyn TextFiles,
    options: &SpeechOptions,
) -> SpeechResult<SpeechOutcome> {
    let text_path = text_companion_path(audio_path);
    let converted = convert_to_file(text, &text_path, files, options)?;
    Ok(SpeechOutcome::TextOnly {
        text_path,
        text: converted,
        reason: None,
    })
}

/// Convert `text`, persist it next to `audio_path`, then synthesize.
///
/// Only I/O errors are returned as `Err`; synthesizer problems become a
/// [`SpeechOutcome::TextOnly`] carrying the [`Fallback`] reason.
pub fn speak(
    text: &str,
    audio_path: &Path,
    files: &dyn TextFiles,
    synthesizer: &dyn Synthesizer,
    options: &SpeechOptions,
) -> SpeechResult<SpeechOutcome> {
    let text_path = text_companion_path(audio_path);
    let converted = convert_to_file(text, &text_path, files, options)?;

    if let Err(err) = synthesizer.probe() {
        warn!(error = %err, "speech synthesizer unavailable, keeping text output only");
        return Ok(SpeechOutcome::TextOnly {
            text_path,
            text: converted,
            reason: Some(Fallback::Unavailable(err)),
        });
    }

    match synthesizer.synthesize(&converted, audio_path) {
        Ok(audio_path) => {
            info!(path = %audio_path.display(), "speech generated");
            Ok(SpeechOutcome::Audio {
                audio_path,
                text_path,
                text: converted,
            })
        }
        Err(err) => {
            warn!(error = %err, "speech synthesis failed, keeping text output only");
            Ok(SpeechOutcome::TextOnly {
                text_path,
                text: converted,
                reason: Some(Fallback::SynthesisFailed(err)),
            })
        }
    }
}

/// Read `input_path` and [`speak`] its content
pub fn speak_file(
    input_path: &Path,
    audio_path: &Path,
    files: &dyn TextFiles,
    synthesizer: &dyn Synthesizer,
    options: &SpeechOptions,
) -> SpeechResult<SpeechOutcome> {
    let text = files.read_text(input_path)?;
    speak(&text, audio_path, files, synthesizer, options)
}
