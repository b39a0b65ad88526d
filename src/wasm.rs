//! WASM bindings for mathvox
//!
//! This module provides JavaScript-accessible functions for math-to-speech conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Per-stage switches (exposed to WASM); omitted fields stay enabled
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct SpeechConvertOptions {
    #[serde(default = "default_true")]
    pub commands: bool,
    #[serde(default = "default_true")]
    pub symbols: bool,
    #[serde(default = "default_true")]
    pub structural: bool,
    #[serde(default = "default_true")]
    pub equations: bool,
    #[serde(default = "default_true")]
    pub generic: bool,
    #[serde(default = "default_true")]
    pub operators: bool,
    #[serde(default = "default_true")]
    pub canonicalize: bool,
    /// Also return the text after every stage
    #[serde(default)]
    pub trace: bool,
}

#[cfg(feature = "wasm")]
impl Default for SpeechConvertOptions {
    fn default() -> Self {
        Self {
            commands: true,
            symbols: true,
            structural: true,
            equations: true,
            generic: true,
            operators: true,
            canonicalize: true,
            trace: false,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<&SpeechConvertOptions> for crate::SpeechOptions {
    fn from(opts: &SpeechConvertOptions) -> Self {
        crate::SpeechOptions {
            commands: opts.commands,
            symbols: opts.symbols,
            structural: opts.structural,
            equations: opts.equations,
            generic: opts.generic,
            operators: opts.operators,
            canonicalize: opts.canonicalize,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Text after one pipeline stage
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: String,
    pub output: String,
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Stage-by-stage outputs, empty unless tracing was requested
    pub stages: Vec<StageOutput>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert math notation to spoken English
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "mathToSpeech")]
pub fn math_to_speech_wasm(input: &str) -> String {
    crate::math_to_speech(input)
}

/// Convert with per-stage options; malformed options fall back to defaults
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "mathToSpeechWithOptions")]
pub fn math_to_speech_with_options_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: SpeechConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let speech_opts = crate::SpeechOptions::from(&opts);

    let result = if opts.trace {
        let trace = crate::math_to_speech_traced(input, &speech_opts);
        ConvertResult {
            output: trace.output().to_string(),
            stages: trace
                .stages
                .iter()
                .map(|(stage, text)| StageOutput {
                    stage: stage.name().to_string(),
                    output: text.clone(),
                })
                .collect(),
        }
    } else {
        ConvertResult {
            output: crate::math_to_speech_with_options(input, &speech_opts),
            stages: vec![],
        }
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
