//! Pure scoring math for the individual screening signals.
//!
//! Each analyzer turns collaborator output (recognized text, phonetic
//! encodings, extracted handwriting features) into a raw score suitable for
//! normalization and the cumulative assessment. OCR, speech recognition and
//! text-to-IPA conversion happen upstream and are not implemented here.

pub mod dictation;
pub mod handwriting;
pub mod phonetics;
pub mod text;

pub use dictation::{dictation_accuracy, phrases_for_age};
pub use handwriting::HandwritingFeatures;
pub use phonetics::pronunciation_inaccuracy;
pub use text::{levenshtein, phonetic_accuracy, spelling_accuracy};
