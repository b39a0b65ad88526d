//! Error handling for mathvox
//!
//! The converter itself never fails. These types cover the orchestration
//! around it: reading and writing text, and driving the external synthesis
//! tool.

use std::path::PathBuf;

use thiserror::Error;

/// File capability errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Classify a read failure, separating a missing file from other errors
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound { path }
        } else {
            FileError::Read { path, source }
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileError::Write {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::NotFound { path }
            | FileError::Read { path, .. }
            | FileError::Write { path, .. } => path,
        }
    }
}

/// External synthesis tool errors
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The executable is not on PATH
    #[error("{executable} not found in PATH")]
    NotFound { executable: String },

    /// The executable exists but its probe run failed
    #[error("{executable} is installed but not runnable: {diagnostic}")]
    ProbeFailed {
        executable: String,
        diagnostic: String,
    },

    #[error("{executable} did not answer the probe within {seconds}s")]
    ProbeTimedOut { executable: String, seconds: u64 },

    /// The process could not be started
    #[error("failed to start {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with failure
    #[error("speech synthesis failed ({status}): {diagnostic}")]
    Invocation { status: String, diagnostic: String },
}

impl SynthesisError {
    /// Availability errors mean the tool cannot be used at all; the caller
    /// falls back to text output without attempting synthesis.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            SynthesisError::NotFound { .. }
                | SynthesisError::ProbeFailed { .. }
                | SynthesisError::ProbeTimedOut { .. }
        )
    }

    /// Captured tool output, if any
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            SynthesisError::ProbeFailed { diagnostic, .. }
            | SynthesisError::Invocation { diagnostic, .. } => Some(diagnostic),
            _ => None,
        }
    }
}

/// Errors fatal to one speak/convert invocation
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error(transparent)]
    Io(#[from] FileError),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SpeechError {
    pub fn config(message: impl Into<String>) -> Self {
        SpeechError::Config {
            message: message.into(),
        }
    }
}

/// Result type for orchestration operations
pub type SpeechResult<T> = Result<T, SpeechError>;
