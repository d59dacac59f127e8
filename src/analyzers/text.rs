//! Edit-distance based text accuracy scoring.

/// Levenshtein distance between two strings, over characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut current_row = vec![i + 1];
        for (j, &cb) in b.iter().enumerate() {
            let insertions = previous_row[j + 1] + 1;
            let deletions = current_row[j] + 1;
            let substitutions = previous_row[j] + usize::from(ca != cb);
            current_row.push(insertions.min(deletions).min(substitutions));
        }
        previous_row = current_row;
    }
    previous_row[b.len()]
}

/// Spelling accuracy of `text` against its externally corrected form, as a
/// percentage. 100 means no corrections were needed; heavy correction can
/// push the value below zero.
pub fn spelling_accuracy(text: &str, corrected: &str) -> f64 {
    let errors = levenshtein(text, corrected);
    let length = text.chars().count().max(1);
    100.0 * (1.0 - errors as f64 / length as f64)
}

/// Phonetic accuracy over already-encoded word codes (Soundex or similar),
/// comparing the user's words to the corrected words.
///
/// The edit distance is taken over the space-joined code strings but the
/// denominator is the original word count, matching the upstream screening
/// protocol.
pub fn phonetic_accuracy(original_codes: &[String], corrected_codes: &[String]) -> f64 {
    let errors = levenshtein(&original_codes.join(" "), &corrected_codes.join(" "));
    let words = original_codes.len().max(1);
    100.0 * (1.0 - errors as f64 / words as f64)
}
