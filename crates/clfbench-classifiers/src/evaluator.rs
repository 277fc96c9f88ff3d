//! Load → split → fit → predict → score pipeline.
use std::path::Path;

use crate::config::EvaluationConfig;
use crate::data_handling::split_records;
use crate::error::Result;
use crate::io::read_records;
use crate::metrics::{score, Metrics};
use crate::models::Classifier;

/// Evaluate `classifier` on the dataset at `dataset_path`.
///
/// The file is expected to have a header row; 70% of its rows, sampled at
/// random, are used for training and the rest for scoring. Labels are the
/// last column.
pub fn evaluate<P: AsRef<Path>>(dataset_path: P, classifier: &mut dyn Classifier) -> Result<Metrics> {
    evaluate_with_config(dataset_path, classifier, &EvaluationConfig::default())
}

/// Same as [`evaluate`] with an explicit split configuration.
pub fn evaluate_with_config<P: AsRef<Path>>(
    dataset_path: P,
    classifier: &mut dyn Classifier,
    config: &EvaluationConfig,
) -> Result<Metrics> {
    let dataset_path = dataset_path.as_ref();
    log::info!(
        "Evaluating '{}' on {}",
        classifier.name(),
        dataset_path.display()
    );

    let records = read_records(dataset_path, config.has_header)?;
    let split = split_records(&records, config.train_fraction, config.sampling)?;
    split.train.log_summary("Training");
    split.test.log_summary("Test");

    classifier.fit(&split.train.x, &split.train.y);
    let predictions = classifier.predict(&split.test.x)?;

    let metrics = score(&predictions, split.test.y.as_slice())?;
    log::info!("'{}' scored {}", classifier.name(), metrics);
    Ok(metrics)
}
