//! Distance functions over equal-length feature vectors.
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Distance strategy used by neighbor-based classifiers.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        match self {
            DistanceMetric::Euclidean => euclidean(a, b),
            DistanceMetric::Manhattan => manhattan(a, b),
        }
    }
}

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(HarnessError::Shape(format!(
            "distance requires equal length vectors, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Square root of the summed squared component differences.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum.sqrt())
}

/// Sum of absolute component differences.
pub fn manhattan(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
}
