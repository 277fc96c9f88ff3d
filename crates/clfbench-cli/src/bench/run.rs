//! Benchmark configuration and the evaluate-every-classifier loop.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use clfbench_classifiers::config::{EvaluationConfig, ModelConfig, ModelType};
use clfbench_classifiers::evaluator::evaluate_with_config;
use clfbench_classifiers::leaderboard::Leaderboard;
use clfbench_classifiers::math::DistanceMetric;
use clfbench_classifiers::models::factory::build_model;

/// Classifiers to benchmark and how to split the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    pub evaluation: EvaluationConfig,
    pub classifiers: Vec<ModelConfig>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            evaluation: EvaluationConfig::default(),
            classifiers: vec![
                ModelConfig::new("random", ModelType::Random { seed: 42 }),
                ModelConfig::new(
                    "knn",
                    ModelType::KNN {
                        k: 3,
                        distance: DistanceMetric::Euclidean,
                    },
                ),
            ],
        }
    }
}

impl BenchConfig {
    /// Override the seed of every random baseline.
    pub fn set_random_seed(&mut self, seed: u64) {
        for model in self.classifiers.iter_mut() {
            if let ModelType::Random { seed: s } = &mut model.model_type {
                *s = seed;
            }
        }
    }

    /// Override the neighbor count of every KNN classifier.
    pub fn set_knn_k(&mut self, k: usize) {
        for model in self.classifiers.iter_mut() {
            if let ModelType::KNN { k: current, .. } = &mut model.model_type {
                *current = k;
            }
        }
    }
}

/// Load a benchmark configuration from a JSON file.
pub fn load_bench_config<P: AsRef<Path>>(path: P) -> Result<BenchConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: BenchConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Evaluate every configured classifier on `dataset` and rank the results.
///
/// The first load, parse or prediction error aborts the run.
pub fn run_benchmark<P: AsRef<Path>>(dataset: P, config: &BenchConfig) -> Result<Leaderboard> {
    let dataset = dataset.as_ref();
    if config.classifiers.is_empty() {
        anyhow::bail!("No classifiers configured");
    }

    let mut leaderboard = Leaderboard::new();
    for params in &config.classifiers {
        let mut model = build_model(params)
            .with_context(|| format!("Failed to build classifier '{}'", params.name))?;
        let metrics = evaluate_with_config(dataset, model.as_mut(), &config.evaluation)
            .with_context(|| format!("Evaluation of '{}' failed", params.name))?;
        leaderboard.insert(params.name.clone(), metrics);
    }
    Ok(leaderboard)
}

/// Write the ranked leaderboard as JSON.
pub fn write_leaderboard_json<P: AsRef<Path>>(leaderboard: &Leaderboard, path: P) -> Result<()> {
    let json = leaderboard
        .to_json()
        .context("Failed to serialize leaderboard")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
    Ok(())
}
