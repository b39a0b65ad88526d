//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Text file capabilities for the orchestration layer

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{FileError, SpeechError, SpeechResult, SynthesisError};
pub use files::{
    default_audio_path, text_companion_path, MemoryTextFiles, StdTextFiles, TextFiles,
};
