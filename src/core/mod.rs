//! Domain types shared across the assessment pipeline.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five screening sub-tests. Closed set: the weighting scheme and the
/// assessment engine are only defined over exactly these signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTest {
    EyeTracking,
    Handwriting,
    Phonetics,
    Questionnaire,
    Dictation,
}

impl SubTest {
    /// All sub-tests, in weight order (heaviest first).
    pub const ALL: [SubTest; 5] = [
        SubTest::EyeTracking,
        SubTest::Handwriting,
        SubTest::Phonetics,
        SubTest::Questionnaire,
        SubTest::Dictation,
    ];

    /// Stable wire/config name for this sub-test.
    pub fn name(&self) -> &'static str {
        match self {
            SubTest::EyeTracking => "eye_tracking",
            SubTest::Handwriting => "handwriting",
            SubTest::Phonetics => "phonetics",
            SubTest::Questionnaire => "questionnaire",
            SubTest::Dictation => "dictation",
        }
    }
}

impl fmt::Display for SubTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sub-test's raw output together with its defined valid range.
///
/// Produced by an external collaborator (video analysis, handwriting
/// analysis, phonetics analysis, questionnaire scorer, dictation scorer).
/// `min < max` is the collaborator's invariant; values outside `[min, max]`
/// are accepted and normalize outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl RawMeasurement {
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self { value, min, max }
    }

    /// Rescale this measurement to the unit interval.
    pub fn normalized(&self) -> Result<f64> {
        crate::scoring::normalize(self.value, self.min, self.max)
    }
}

/// Binary majority signal derived from the weighted fuzzy vote.
///
/// Serialized as `0` (no indication) or `1` (indication) to match the report
/// format consumed by downstream storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DominantClass {
    NoIndication,
    Indication,
}

impl From<DominantClass> for u8 {
    fn from(class: DominantClass) -> u8 {
        match class {
            DominantClass::NoIndication => 0,
            DominantClass::Indication => 1,
        }
    }
}

impl TryFrom<u8> for DominantClass {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(DominantClass::NoIndication),
            1 => Ok(DominantClass::Indication),
            other => Err(format!("dominant class must be 0 or 1, got {}", other)),
        }
    }
}

impl fmt::Display for DominantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Human-readable classification band for the cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationBand {
    #[serde(rename = "Strong indication of dyslexia")]
    Strong, // cumulative >= 0.7
    #[serde(rename = "Moderate indication of dyslexia")]
    Moderate, // 0.4 <= cumulative < 0.7
    #[serde(rename = "No indication of dyslexia")]
    None, // cumulative < 0.4
}

impl ClassificationBand {
    /// Map a cumulative score onto its band.
    pub fn from_cumulative_score(score: f64) -> Self {
        if score >= 0.7 {
            ClassificationBand::Strong
        } else if score >= 0.4 {
            ClassificationBand::Moderate
        } else {
            ClassificationBand::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassificationBand::Strong => "Strong indication of dyslexia",
            ClassificationBand::Moderate => "Moderate indication of dyslexia",
            ClassificationBand::None => "No indication of dyslexia",
        }
    }
}

impl fmt::Display for ClassificationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final output of one assessment invocation. Immutable once produced;
/// persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub cumulative_score: f64,
    pub final_class: ClassificationBand,
    pub dominant_class: DominantClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_test_names_round_trip_through_serde() {
        for sub_test in SubTest::ALL {
            let json = serde_json::to_string(&sub_test).unwrap();
            assert_eq!(json, format!("\"{}\"", sub_test.name()));
            let back: SubTest = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sub_test);
        }
    }

    #[test]
    fn dominant_class_serializes_as_binary_integer() {
        assert_eq!(
            serde_json::to_string(&DominantClass::NoIndication).unwrap(),
            "0"
        );
        assert_eq!(
            serde_json::to_string(&DominantClass::Indication).unwrap(),
            "1"
        );
        let parsed: DominantClass = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, DominantClass::Indication);
        assert!(serde_json::from_str::<DominantClass>("2").is_err());
    }

    #[test]
    fn band_thresholds_are_inclusive_at_the_lower_edge() {
        assert_eq!(
            ClassificationBand::from_cumulative_score(0.7),
            ClassificationBand::Strong
        );
        assert_eq!(
            ClassificationBand::from_cumulative_score(0.4),
            ClassificationBand::Moderate
        );
        assert_eq!(
            ClassificationBand::from_cumulative_score(0.399_999),
            ClassificationBand::None
        );
    }

    #[test]
    fn band_labels_match_wire_strings() {
        let json = serde_json::to_string(&ClassificationBand::Moderate).unwrap();
        assert_eq!(json, "\"Moderate indication of dyslexia\"");
    }
}
