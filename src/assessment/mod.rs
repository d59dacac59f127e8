//! Cumulative multi-signal fuzzy assessment.
//!
//! Combines the five independently-scored sub-tests into one classification
//! using a two-pass weighted-voting scheme: fuzzy memberships drive a
//! dominant-class vote, sub-tests that disagree with the dominant class have
//! their weight halved, and the cumulative score is the dot product of the
//! adjusted weights with the original continuous scores. The adjusted
//! weights are deliberately not renormalized after a penalty, so a penalized
//! run scores against a sub-unity weight total.

pub mod fuzzy;

pub use fuzzy::FuzzyMembership;

use crate::config::SubTestWeights;
use crate::core::{
    AssessmentResult, ClassificationBand, DominantClass, Error, Result, SubTest,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Halving factor applied to a sub-test whose membership disagrees with the
/// dominant class.
const INCONSISTENCY_PENALTY: f64 = 0.5;

/// Per-sub-test view of one assessment, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SubTestBreakdown {
    pub sub_test: SubTest,
    pub normalized_score: f64,
    pub membership: FuzzyMembership,
    pub base_weight: f64,
    pub adjusted_weight: f64,
    pub consistent: bool,
}

/// An [`AssessmentResult`] together with the per-sub-test breakdown it was
/// derived from. Both come out of the same single computation.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedAssessment {
    pub result: AssessmentResult,
    pub breakdown: Vec<SubTestBreakdown>,
}

/// The cumulative assessment engine, bound to a validated weight table.
///
/// Pure and stateless once constructed: every call operates only on its own
/// input mapping and the read-only weights, so concurrent use needs no
/// coordination.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    weights: SubTestWeights,
}

impl AssessmentEngine {
    /// Build an engine from a weight table, rejecting tables that fail the
    /// sum-to-1.0 or per-weight range invariants.
    pub fn new(weights: SubTestWeights) -> Result<Self> {
        weights
            .validate()
            .map_err(Error::configuration)?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &SubTestWeights {
        &self.weights
    }

    /// Combine five normalized sub-test scores into a classification.
    ///
    /// The mapping must contain every [`SubTest`]; a missing key is an
    /// [`Error::InvalidInput`], never a silent default.
    pub fn assess(&self, scores: &BTreeMap<SubTest, f64>) -> Result<AssessmentResult> {
        self.assess_detailed(scores).map(|detailed| detailed.result)
    }

    /// [`assess`](Self::assess), keeping the per-sub-test breakdown.
    pub fn assess_detailed(&self, scores: &BTreeMap<SubTest, f64>) -> Result<DetailedAssessment> {
        let scores = require_all_sub_tests(scores)?;

        let memberships: [(SubTest, f64, FuzzyMembership); 5] = scores
            .map(|(sub_test, score)| (sub_test, score, FuzzyMembership::from_score(score)));

        let dominant_class = self.dominant_class(&memberships);

        let mut breakdown = Vec::with_capacity(memberships.len());
        let mut cumulative_score = 0.0;
        for (sub_test, score, membership) in memberships {
            let base_weight = self.weights.weight(sub_test);
            let consistent = is_consistent(membership, dominant_class);
            let adjusted_weight = if consistent {
                base_weight
            } else {
                base_weight * INCONSISTENCY_PENALTY
            };
            cumulative_score += adjusted_weight * score;
            breakdown.push(SubTestBreakdown {
                sub_test,
                normalized_score: score,
                membership,
                base_weight,
                adjusted_weight,
                consistent,
            });
        }

        Ok(DetailedAssessment {
            result: AssessmentResult {
                cumulative_score,
                final_class: ClassificationBand::from_cumulative_score(cumulative_score),
                dominant_class,
            },
            breakdown,
        })
    }

    /// Weighted dominant-class vote over the fuzzy memberships. A tie
    /// resolves to no indication.
    fn dominant_class(&self, memberships: &[(SubTest, f64, FuzzyMembership)]) -> DominantClass {
        let mut vote_for = 0.0;
        let mut vote_against = 0.0;
        for &(sub_test, _, membership) in memberships {
            let weight = self.weights.weight(sub_test);
            vote_for += weight * membership.value();
            vote_against += weight * (1.0 - membership.value());
        }
        if vote_for > vote_against {
            DominantClass::Indication
        } else {
            DominantClass::NoIndication
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self {
            weights: SubTestWeights::default(),
        }
    }
}

/// Check the input mapping covers the closed sub-test set, returning the
/// scores in canonical order.
fn require_all_sub_tests(scores: &BTreeMap<SubTest, f64>) -> Result<[(SubTest, f64); 5]> {
    let mut out = [(SubTest::EyeTracking, 0.0); 5];
    for (slot, sub_test) in out.iter_mut().zip(SubTest::ALL) {
        let score = scores.get(&sub_test).ok_or_else(|| {
            Error::invalid_input(format!("missing score for sub-test '{}'", sub_test))
        })?;
        *slot = (sub_test, *score);
    }
    Ok(out)
}

/// A sub-test is inconsistent when its membership sits on the opposite side
/// of 0.5 from the dominant class.
fn is_consistent(membership: FuzzyMembership, dominant_class: DominantClass) -> bool {
    let leans_indication = membership.value() > 0.5;
    match dominant_class {
        DominantClass::NoIndication => !leans_indication,
        DominantClass::Indication => leans_indication,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_map(scores: [(SubTest, f64); 5]) -> BTreeMap<SubTest, f64> {
        scores.into_iter().collect()
    }

    fn all_at(value: f64) -> BTreeMap<SubTest, f64> {
        SubTest::ALL.iter().map(|&t| (t, value)).collect()
    }

    #[test]
    fn mixed_scores_penalize_the_dissenting_sub_test() {
        // Four signals at or above uncertain, dictation alone below: dominant
        // class is indication and dictation's weight halves to 0.05.
        let engine = AssessmentEngine::default();
        let scores = score_map([
            (SubTest::EyeTracking, 0.8),
            (SubTest::Handwriting, 0.9),
            (SubTest::Phonetics, 0.4),
            (SubTest::Questionnaire, 0.4),
            (SubTest::Dictation, 0.3),
        ]);

        let detailed = engine.assess_detailed(&scores).unwrap();
        assert_eq!(detailed.result.dominant_class, DominantClass::Indication);

        let dictation = detailed
            .breakdown
            .iter()
            .find(|row| row.sub_test == SubTest::Dictation)
            .unwrap();
        // 0.3 is uncertain (membership 0.5), which still counts against the
        // indication class in the consistency check.
        assert_eq!(dictation.membership, FuzzyMembership::Uncertain);
        assert!(!dictation.consistent);
        assert!((dictation.adjusted_weight - 0.05).abs() < 1e-12);
    }

    #[test]
    fn uniform_low_scores_leave_weights_untouched() {
        let engine = AssessmentEngine::default();
        let detailed = engine.assess_detailed(&all_at(0.1)).unwrap();

        assert_eq!(detailed.result.dominant_class, DominantClass::NoIndication);
        for row in &detailed.breakdown {
            assert!(row.consistent);
            assert_eq!(row.adjusted_weight, row.base_weight);
        }
        assert!((detailed.result.cumulative_score - 0.1).abs() < 1e-12);
        assert_eq!(detailed.result.final_class, ClassificationBand::None);
    }

    #[test]
    fn exact_vote_tie_resolves_to_no_indication() {
        // Every membership at 0.5 makes both vote sums identical expressions.
        let engine = AssessmentEngine::default();
        let result = engine.assess(&all_at(0.5)).unwrap();
        assert_eq!(result.dominant_class, DominantClass::NoIndication);
    }

    #[test]
    fn missing_sub_test_is_rejected() {
        let engine = AssessmentEngine::default();
        let mut scores = all_at(0.5);
        scores.remove(&SubTest::Dictation);

        let err = engine.assess(&scores).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("dictation"));
    }

    #[test]
    fn invalid_weight_table_is_rejected_at_construction() {
        let weights = SubTestWeights {
            eye_tracking: 0.50,
            ..SubTestWeights::default()
        };
        let err = AssessmentEngine::new(weights).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn cumulative_score_uses_continuous_scores_not_memberships() {
        // All five at 0.8: every membership is 1.0 but the cumulative score
        // must come out at 0.8, not 1.0.
        let engine = AssessmentEngine::default();
        let result = engine.assess(&all_at(0.8)).unwrap();
        assert!((result.cumulative_score - 0.8).abs() < 1e-12);
        assert_eq!(result.final_class, ClassificationBand::Strong);
    }

    #[test]
    fn penalized_weights_are_not_renormalized() {
        // One dissenter: the adjusted weights sum below 1.0 and the
        // cumulative score is computed against that sub-unity total.
        let engine = AssessmentEngine::default();
        let scores = score_map([
            (SubTest::EyeTracking, 0.9),
            (SubTest::Handwriting, 0.9),
            (SubTest::Phonetics, 0.9),
            (SubTest::Questionnaire, 0.9),
            (SubTest::Dictation, 0.1),
        ]);

        let detailed = engine.assess_detailed(&scores).unwrap();
        let weight_total: f64 = detailed
            .breakdown
            .iter()
            .map(|row| row.adjusted_weight)
            .sum();
        assert!((weight_total - 0.95).abs() < 1e-12);
    }
}
