//! Core conversion modules
//!
//! - `math2speech`: math notation → spoken English rewrite pipeline

pub mod math2speech;

pub use math2speech::{
    convert, convert_traced, convert_with_options, pipeline, ConversionTrace, SpeechOptions, Stage,
    StageRules,
};
