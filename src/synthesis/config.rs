//! External synthesizer configuration

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use crate::utils::error::{SpeechError, SpeechResult};

/// How the external text-to-speech executable is invoked.
///
/// With the `config` feature this can be loaded from TOML; missing keys
/// keep their defaults:
///
/// ```toml
/// model = "F5TTS_v1_Base"
/// nfe_steps = 32
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct SynthesisConfig {
    /// Executable name (looked up on PATH) or path
    /// Default: "f5-tts_infer-cli"
    pub executable: String,

    /// Default: "F5TTS_v1_Base"
    pub model: String,

    /// Number of function evaluations per generated step
    /// Default: 20
    pub nfe_steps: u32,

    /// Classifier-free guidance strength
    /// Default: 2.0
    pub cfg_strength: f32,

    /// Upper bound on the availability probe
    /// Default: 5
    pub probe_timeout_secs: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            executable: "f5-tts_infer-cli".to_string(),
            model: "F5TTS_v1_Base".to_string(),
            nfe_steps: 20,
            cfg_strength: 2.0,
            probe_timeout_secs: 5,
        }
    }
}

impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_nfe_steps(mut self, steps: u32) -> Self {
        self.nfe_steps = steps;
        self
    }

    pub fn with_cfg_strength(mut self, strength: f32) -> Self {
        self.cfg_strength = strength;
        self
    }

    pub fn with_probe_timeout_secs(mut self, secs: u64) -> Self {
        self.probe_timeout_secs = secs;
        self
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Reject values the executable would refuse anyway
    pub fn validate(&self) -> SpeechResult<()> {
        if self.executable.trim().is_empty() {
            return Err(SpeechError::config("executable must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(SpeechError::config("model must not be empty"));
        }
        if self.nfe_steps == 0 {
            return Err(SpeechError::config("nfe_steps must be positive"));
        }
        if !self.cfg_strength.is_finite() || self.cfg_strength < 0.0 {
            return Err(SpeechError::config(format!(
                "cfg_strength must be a non-negative number, got {}",
                self.cfg_strength
            )));
        }
        if self.probe_timeout_secs == 0 {
            return Err(SpeechError::config("probe_timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Arguments for one synthesis run
    pub fn synthesis_args(&self, text: &str, output: &Path) -> Vec<OsString> {
        vec![
            "--gen_text".into(),
            text.into(),
            "--output_file".into(),
            output.as_os_str().to_os_string(),
            "--model".into(),
            self.model.as_str().into(),
            "--nfe_step".into(),
            self.nfe_steps.to_string().into(),
            "--cfg_strength".into(),
            self.cfg_strength.to_string().into(),
        ]
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "config")]
    pub fn from_toml_str(source: &str) -> SpeechResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SpeechError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: &Path) -> SpeechResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::error::FileError::read(path, e))?;
        Self::from_toml_str(&source).map_err(|err| match err {
            SpeechError::Config { message } => {
                SpeechError::config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.executable, "f5-tts_infer-cli");
        assert_eq!(config.model, "F5TTS_v1_Base");
        assert_eq!(config.nfe_steps, 20);
        assert_eq!(config.cfg_strength, 2.0);
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SynthesisConfig::new()
            .with_executable("/opt/tts/bin/tts")
            .with_model("Custom")
            .with_nfe_steps(32)
            .with_cfg_strength(1.5)
            .with_probe_timeout_secs(2);
        assert_eq!(config.executable, "/opt/tts/bin/tts");
        assert_eq!(config.model, "Custom");
        assert_eq!(config.nfe_steps, 32);
        assert_eq!(config.cfg_strength, 1.5);
        assert_eq!(config.probe_timeout_secs, 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SynthesisConfig::new().with_nfe_steps(0).validate().is_err());
        assert!(SynthesisConfig::new()
            .with_cfg_strength(f32::NAN)
            .validate()
            .is_err());
        assert!(SynthesisConfig::new().with_model(" ").validate().is_err());
        assert!(SynthesisConfig::new()
            .with_probe_timeout_secs(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_synthesis_args() {
        let args = SynthesisConfig::new().synthesis_args("x plus y", Path::new("out/a.wav"));
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "--gen_text",
                "x plus y",
                "--output_file",
                "out/a.wav",
                "--model",
                "F5TTS_v1_Base",
                "--nfe_step",
                "20",
                "--cfg_strength",
                "2"
            ]
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_partial() {
        let config = SynthesisConfig::from_toml_str("model = \"Other\"\nnfe_steps = 8\n").unwrap();
        assert_eq!(config.model, "Other");
        assert_eq!(config.nfe_steps, 8);
        assert_eq!(config.executable, "f5-tts_infer-cli");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_rejects_unknown_and_invalid() {
        assert!(SynthesisConfig::from_toml_str("voice = \"x\"").is_err());
        let err = SynthesisConfig::from_toml_str("nfe_steps = 0").unwrap_err();
        assert!(err.to_string().contains("nfe_steps"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tts.toml");
        std::fs::write(&path, "cfg_strength = 2.5\n").unwrap();
        let config = SynthesisConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.cfg_strength, 2.5);

        let missing = SynthesisConfig::from_toml_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(SpeechError::Io(_))));
    }
}
