use crate::error::Result;
use crate::math::{Array1, Array2};

/// Fit/predict contract shared by every classifier benchmarked by the harness.
///
/// Labels are strings; the harness scores `"1"` as the positive class.
pub trait Classifier {
    /// Learn from the training rows of `x` and their labels `y`.
    ///
    /// Must tolerate zero rows. Implementations copy whatever they retain.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<String>);

    /// Predict one label per row of `x`, in row order.
    ///
    /// May be called any number of times after a single `fit`. Returns
    /// `HarnessError::NotFitted` when the model needs training data it does
    /// not have yet.
    fn predict(&mut self, x: &Array2<f64>) -> Result<Vec<String>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
