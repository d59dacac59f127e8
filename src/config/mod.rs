//! Weight configuration for the cumulative assessment.

pub mod loader;

pub use loader::load_config;

use crate::core::SubTest;
use serde::{Deserialize, Serialize};

/// Tolerance for the weight-sum invariant.
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Static per-sub-test weights for the cumulative assessment.
///
/// The five weights must sum to 1.0. Validated before the engine is
/// constructed; never mutated during an assessment (the consistency penalty
/// works on a per-call copy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubTestWeights {
    /// Weight for the eye-tracking proxy signal (0.0-1.0)
    #[serde(default = "default_eye_tracking_weight")]
    pub eye_tracking: f64,

    /// Weight for handwriting analysis (0.0-1.0)
    #[serde(default = "default_handwriting_weight")]
    pub handwriting: f64,

    /// Weight for phonetics analysis (0.0-1.0)
    #[serde(default = "default_phonetics_weight")]
    pub phonetics: f64,

    /// Weight for the questionnaire score (0.0-1.0)
    #[serde(default = "default_questionnaire_weight")]
    pub questionnaire: f64,

    /// Weight for dictation scoring (0.0-1.0)
    #[serde(default = "default_dictation_weight")]
    pub dictation: f64,
}

impl Default for SubTestWeights {
    fn default() -> Self {
        Self {
            eye_tracking: default_eye_tracking_weight(),
            handwriting: default_handwriting_weight(),
            phonetics: default_phonetics_weight(),
            questionnaire: default_questionnaire_weight(),
            dictation: default_dictation_weight(),
        }
    }
}

impl SubTestWeights {
    /// Look up the weight for one sub-test.
    pub fn weight(&self, sub_test: SubTest) -> f64 {
        match sub_test {
            SubTest::EyeTracking => self.eye_tracking,
            SubTest::Handwriting => self.handwriting,
            SubTest::Phonetics => self.phonetics,
            SubTest::Questionnaire => self.questionnaire,
            SubTest::Dictation => self.dictation,
        }
    }

    // Pure function: check if a weight is in valid range
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: validate a single weight with name
    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    fn validate_weight_sum(&self) -> Result<(), String> {
        let sum: f64 = SubTest::ALL.iter().map(|&t| self.weight(t)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            Err(format!(
                "sub-test weights must sum to 1.0, but sum to {:.6}",
                sum
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that every weight is in range and the table sums to 1.0
    /// (with small tolerance for floating point).
    pub fn validate(&self) -> Result<(), String> {
        self.validate_weight_sum()?;

        for sub_test in SubTest::ALL {
            Self::validate_weight(self.weight(sub_test), sub_test.name())?;
        }

        Ok(())
    }
}

// Default weights from the reference screening protocol: the eye-tracking
// proxy carries the most signal, dictation the least.
fn default_eye_tracking_weight() -> f64 {
    0.30
}
fn default_handwriting_weight() -> f64 {
    0.25
}
fn default_phonetics_weight() -> f64 {
    0.20
}
fn default_questionnaire_weight() -> f64 {
    0.15
}
fn default_dictation_weight() -> f64 {
    0.10
}

/// Top-level configuration, deserialized from `.lexiscreen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiscreenConfig {
    /// Sub-test weight table; defaults to the reference protocol weights.
    #[serde(default)]
    pub weights: SubTestWeights,
}
