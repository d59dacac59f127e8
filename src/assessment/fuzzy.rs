//! Three-level fuzzy discretization of normalized sub-test scores.

use serde::Serialize;

/// Fuzzy membership of one sub-test in the "indication" class.
///
/// Used only for the weighted vote and the consistency penalty; the final
/// cumulative score is computed from the continuous normalized score, not
/// from this discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "f64")]
pub enum FuzzyMembership {
    None,      // score < 0.3
    Uncertain, // 0.3 <= score < 0.7
    Strong,    // score >= 0.7
}

impl FuzzyMembership {
    /// Classify a normalized score. Boundaries are hard tie-breaks: exactly
    /// 0.7 is strong, exactly 0.3 is uncertain.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            FuzzyMembership::Strong
        } else if score >= 0.3 {
            FuzzyMembership::Uncertain
        } else {
            FuzzyMembership::None
        }
    }

    /// Numeric membership value used in the weighted vote.
    pub fn value(self) -> f64 {
        match self {
            FuzzyMembership::None => 0.0,
            FuzzyMembership::Uncertain => 0.5,
            FuzzyMembership::Strong => 1.0,
        }
    }
}

impl From<FuzzyMembership> for f64 {
    fn from(membership: FuzzyMembership) -> f64 {
        membership.value()
    }
}
