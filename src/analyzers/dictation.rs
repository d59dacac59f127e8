//! Dictation phrase bank and scoring.

use crate::analyzers::text::levenshtein;
use crate::core::{Error, Result};

/// Dictation phrases for students under 7.
const PHRASES_UNDER_7: &[&str] = &[
    "The cat is on the mat.",
    "I like my red ball.",
    "It is a sunny day.",
    "We go to the park.",
    "I love my dog.",
];

/// Dictation phrases for students under 14.
const PHRASES_UNDER_14: &[&str] = &[
    "The river flows through the valley.",
    "Science is an interesting subject.",
    "We learn new things every day.",
    "Teamwork helps us succeed.",
    "Reading books expands our knowledge.",
];

/// Dictation phrases for students up to 21.
const PHRASES_UNDER_21: &[&str] = &[
    "The advancements in technology are remarkable.",
    "Environmental conservation is crucial for our planet.",
    "Education shapes the future of our society.",
    "Artificial intelligence is transforming industries.",
    "Climate change demands immediate attention.",
];

/// Age-appropriate phrases for a dictation session.
///
/// Ages above 21 are outside the screening protocol and are rejected.
pub fn phrases_for_age(age: u32) -> Result<&'static [&'static str]> {
    match age {
        0..=6 => Ok(PHRASES_UNDER_7),
        7..=13 => Ok(PHRASES_UNDER_14),
        14..=21 => Ok(PHRASES_UNDER_21),
        _ => Err(Error::invalid_input(format!(
            "age must be between 0 and 21, got {}",
            age
        ))),
    }
}

/// Accuracy of a written dictation against the expected phrase, as a
/// percentage. Same edit-distance formula as spelling accuracy, measured
/// against the expected text.
pub fn dictation_accuracy(expected: &str, written: &str) -> f64 {
    let errors = levenshtein(expected, written);
    let length = expected.chars().count().max(1);
    100.0 * (1.0 - errors as f64 / length as f64)
}
