use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::math::{Array1, Array2};
use crate::models::classifier_trait::Classifier;

/// Baseline binary classifier that predicts "0" or "1" at random.
///
/// Each instance owns its own stream seeded at construction, so two
/// instances built with the same seed produce the same predictions.
pub struct RandomClassifier {
    rng: StdRng,
}

impl RandomClassifier {
    pub fn new(seed: u64) -> Self {
        RandomClassifier {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Classifier for RandomClassifier {
    /// Nothing to learn.
    fn fit(&mut self, _x: &Array2<f64>, _y: &Array1<String>) {}

    fn predict(&mut self, x: &Array2<f64>) -> Result<Vec<String>> {
        let predictions = (0..x.nrows())
            .map(|_| {
                if self.rng.gen_bool(0.5) {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            })
            .collect();
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "random"
    }
}
