//! Handwriting feature scoring.

use serde::{Deserialize, Serialize};

/// Spacing features extracted from a handwriting sample by the external
/// image-analysis collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandwritingFeatures {
    pub line_spacing: f64,
    pub letter_spacing: f64,
}

impl HandwritingFeatures {
    pub fn new(line_spacing: f64, letter_spacing: f64) -> Self {
        Self {
            line_spacing,
            letter_spacing,
        }
    }

    /// Raw dyslexia-indication score for this sample: the two spacing
    /// features contribute equally.
    pub fn indication_score(&self) -> f64 {
        0.5 * self.line_spacing + 0.5 * self.letter_spacing
    }
}
