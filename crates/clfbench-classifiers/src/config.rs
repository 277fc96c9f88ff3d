use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data_handling::Sampling;
use crate::math::DistanceMetric;

/// Central configuration for one benchmarked classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Name used on the leaderboard.
    pub name: String,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported classifiers and their settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    Random {
        seed: u64,
    },
    KNN {
        k: usize,
        #[serde(default)]
        distance: DistanceMetric,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::Random { seed: 42 }
    }
}

impl ModelType {
    pub fn default_name(&self) -> &'static str {
        match self {
            ModelType::Random { .. } => "random",
            ModelType::KNN { .. } => "knn",
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(ModelType::Random { seed: 42 }),
            "knn" => Ok(ModelType::KNN {
                k: 3,
                distance: DistanceMetric::Euclidean,
            }),
            _ => Err(format!(
                "Unknown model type: {}. Expected one of: random, knn",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, model_type: ModelType) -> Self {
        Self {
            name: name.into(),
            model_type,
        }
    }
}

impl From<ModelType> for ModelConfig {
    fn from(model_type: ModelType) -> Self {
        ModelConfig::new(model_type.default_name(), model_type)
    }
}

/// How a dataset is loaded and split before fitting.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    pub train_fraction: f64,
    pub sampling: Sampling,
    pub has_header: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.7,
            sampling: Sampling::Random { seed: None },
            has_header: true,
        }
    }
}
