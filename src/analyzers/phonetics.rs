//! Pronunciation scoring over IPA transcriptions.

use crate::analyzers::text::levenshtein;

/// Pronunciation inaccuracy between the expected IPA string for the test
/// words and the IPA transcription of what the user actually said, as a
/// percentage in `[0, 100]`. Lower is better.
///
/// The denominator is the longer of the two transcriptions, so a user who
/// says far too much or far too little is penalized either way and an empty
/// comparison never divides by zero.
pub fn pronunciation_inaccuracy(expected_ipa: &str, spoken_ipa: &str) -> f64 {
    let distance = levenshtein(expected_ipa, spoken_ipa);
    let max_length = expected_ipa
        .chars()
        .count()
        .max(spoken_ipa.chars().count())
        .max(1);
    distance as f64 / max_length as f64 * 100.0
}
