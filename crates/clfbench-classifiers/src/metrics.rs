//! Binary classification scoring.
//!
//! `"1"` is the positive class; every other label counts as negative. Scores
//! whose denominator is zero are NaN, not 0 and not an error.
use serde::Serialize;
use std::fmt;

use crate::error::{HarnessError, Result};

pub const POSITIVE_LABEL: &str = "1";

/// 2x2 confusion counts for the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub fp: usize,
    pub tn: usize,
}

impl ConfusionCounts {
    pub fn total(&self) -> usize {
        self.tp + self.fn_ + self.fp + self.tn
    }
}

/// Performance scores of one classifier on one test set.
///
/// Serialize-only: NaN scores are written to JSON as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
}

impl Metrics {
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        let ConfusionCounts { tp, fn_, fp, tn } = *counts;
        let accuracy = (tp + tn) as f64 / counts.total() as f64;
        let recall = tp as f64 / (tp + fn_) as f64;
        let precision = tp as f64 / (tp + fp) as f64;
        let f1 = 2.0 * ((precision * recall) / (precision + recall));
        Metrics {
            accuracy,
            recall,
            precision,
            f1,
        }
    }

    /// Sum of the four scores. NaN if any score is NaN.
    pub fn combined(&self) -> f64 {
        self.accuracy + self.recall + self.precision + self.f1
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "accuracy: {:.4}  recall: {:.4}  precision: {:.4}  f1: {:.4}",
            self.accuracy, self.recall, self.precision, self.f1
        )
    }
}

/// Count true/false positives/negatives of `predictions` against `labels`.
pub fn confusion_counts<P, L>(predictions: &[P], labels: &[L]) -> Result<ConfusionCounts>
where
    P: AsRef<str>,
    L: AsRef<str>,
{
    if predictions.len() != labels.len() {
        return Err(HarnessError::Shape(format!(
            "{} predictions for {} labels",
            predictions.len(),
            labels.len()
        )));
    }

    let mut counts = ConfusionCounts::default();
    for (predicted, actual) in predictions.iter().zip(labels.iter()) {
        let predicted_pos = predicted.as_ref() == POSITIVE_LABEL;
        match (actual.as_ref() == POSITIVE_LABEL, predicted_pos) {
            (true, true) => counts.tp += 1,
            (true, false) => counts.fn_ += 1,
            (false, true) => counts.fp += 1,
            (false, false) => counts.tn += 1,
        }
    }
    Ok(counts)
}

/// Score `predictions` against the ground truth `labels`.
pub fn score<P, L>(predictions: &[P], labels: &[L]) -> Result<Metrics>
where
    P: AsRef<str>,
    L: AsRef<str>,
{
    let counts = confusion_counts(predictions, labels)?;
    log::debug!("Confusion counts: {:?}", counts);
    Ok(Metrics::from_counts(&counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_quadrant() {
        let counts = confusion_counts(&["1", "0", "1", "0"], &["1", "1", "0", "0"]).unwrap();
        assert_eq!(
            counts,
            ConfusionCounts {
                tp: 1,
                fn_: 1,
                fp: 1,
                tn: 1
            }
        );
    }

    #[test]
    fn non_positive_labels_count_as_negative() {
        let counts = confusion_counts(&["yes", "1"], &["2", "1"]).unwrap();
        assert_eq!(counts.tn, 1);
        assert_eq!(counts.tp, 1);
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        assert!(matches!(
            score(&["1"], &["1", "0"]),
            Err(HarnessError::Shape(_))
        ));
    }

    #[test]
    fn empty_input_gives_nan_everywhere() {
        let empty: [&str; 0] = [];
        let m = score(&empty, &empty).unwrap();
        assert!(m.accuracy.is_nan());
        assert!(m.combined().is_nan());
    }
}
