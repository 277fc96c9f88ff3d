//! Data structures and helpers for turning raw records into feature matrices.
//!
//! This module defines `Dataset` and `Split` and contains the train/test
//! splitter used by the evaluator. The last field of every record is the
//! label; the preceding fields are parsed as `f64` features.
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::io::Record;
use crate::math::{Array1, Array2};

/// How training rows are chosen from the record set.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Draw rows uniformly without replacement. `seed: None` uses entropy.
    Random { seed: Option<u64> },
    /// Take the first `floor(n * p)` rows.
    FirstK,
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling::Random { seed: None }
    }
}

/// A feature matrix paired with one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<String>,
}

impl Dataset {
    pub fn new(x: Array2<f64>, y: Array1<String>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(HarnessError::Shape(format!(
                "feature matrix has {} rows but {} labels were given",
                x.nrows(),
                y.len()
            )));
        }
        Ok(Dataset { x, y })
    }

    /// Materialize every record, in order, without splitting.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        materialize(records, feature_count(records)?)
    }

    /// Rows at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select_rows(indices),
            y: self.y.select(indices),
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn log_summary(&self, name: &str) {
        let positives = self.y.iter().filter(|label| label.as_str() == "1").count();
        log::info!(
            "{} set: {} rows ({} positive, {} negative), {} feature columns",
            name,
            self.len(),
            positives,
            self.len() - positives,
            self.n_features()
        );
    }
}

/// Training and test partitions of one record set.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
    /// Source row indices that went into `train`, ascending.
    pub train_indices: Vec<usize>,
    /// Source row indices that went into `test`, ascending.
    pub test_indices: Vec<usize>,
}

/// Partition `records` into training and test datasets.
///
/// The training partition holds `floor(records.len() * train_fraction)` rows.
/// Both partitions keep the original relative row order.
pub fn split_records(records: &[Record], train_fraction: f64, sampling: Sampling) -> Result<Split> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(HarnessError::InvalidProportion(train_fraction));
    }
    let full = Dataset::from_records(records)?;
    let n_samples = full.len();
    let n_train = (n_samples as f64 * train_fraction) as usize;

    let train_indices = match sampling {
        Sampling::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut indices = rand::seq::index::sample(&mut rng, n_samples, n_train).into_vec();
            indices.sort_unstable();
            indices
        }
        Sampling::FirstK => (0..n_train).collect(),
    };

    let mut test_indices = Vec::with_capacity(n_samples - n_train);
    let mut cursor = 0;
    for idx in 0..n_samples {
        if cursor < train_indices.len() && train_indices[cursor] == idx {
            cursor += 1;
        } else {
            test_indices.push(idx);
        }
    }

    let train = full.select(&train_indices);
    let test = full.select(&test_indices);
    log::debug!(
        "Split {} records into {} training and {} test rows ({:?})",
        n_samples,
        train.len(),
        test.len(),
        sampling
    );

    Ok(Split {
        train,
        test,
        train_indices,
        test_indices,
    })
}

fn feature_count(records: &[Record]) -> Result<usize> {
    let first = records.first().ok_or(HarnessError::EmptyDataset)?;
    if first.is_empty() {
        return Err(HarnessError::Shape("record has no label field".to_string()));
    }
    Ok(first.len() - 1)
}

fn materialize(records: &[Record], n_features: usize) -> Result<Dataset> {
    let mut data = Vec::with_capacity(records.len() * n_features);
    let mut labels = Vec::with_capacity(records.len());
    let mut substituted = 0usize;

    for (idx, record) in records.iter().enumerate() {
        if record.len() != n_features + 1 {
            return Err(HarnessError::Shape(format!(
                "record {} has {} fields, expected {}",
                idx,
                record.len(),
                n_features + 1
            )));
        }
        let (label, features) = record.split_last().ok_or(HarnessError::EmptyDataset)?;
        for field in features {
            // Unparseable features silently become 0.0.
            let value = field.parse::<f64>().unwrap_or_else(|_| {
                substituted += 1;
                0.0
            });
            data.push(value);
        }
        labels.push(label.clone());
    }

    if substituted > 0 {
        log::debug!(
            "Replaced {} non-numeric feature values with 0.0",
            substituted
        );
    }

    let x = Array2::from_shape_vec((records.len(), n_features), data)?;
    Dataset::new(x, Array1::from_vec(labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[&[&str]]) -> Vec<Record> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn non_numeric_fields_fall_back_to_zero() {
        let recs = records(&[&["1.5", "abc", "1"], &["", "2", "0"]]);
        let ds = Dataset::from_records(&recs).unwrap();
        assert_eq!(ds.x.as_slice(), &[1.5, 0.0, 0.0, 2.0]);
        assert_eq!(ds.y.to_vec(), vec!["1", "0"]);
    }

    #[test]
    fn infinite_features_parse_without_fallback() {
        let recs = records(&[&["inf", "-inf", "1"]]);
        let ds = Dataset::from_records(&recs).unwrap();
        assert_eq!(ds.x.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn select_picks_rows_and_labels_together() {
        let recs = records(&[&["0", "a"], &["1", "b"], &["2", "c"]]);
        let ds = Dataset::from_records(&recs).unwrap();
        let picked = ds.select(&[2, 0]);
        assert_eq!(picked.x.as_slice(), &[2.0, 0.0]);
        assert_eq!(picked.y.to_vec(), vec!["c", "a"]);
    }

    #[test]
    fn first_k_takes_leading_rows() {
        let recs = records(&[&["0", "a"], &["1", "b"], &["2", "c"], &["3", "d"]]);
        let split = split_records(&recs, 0.5, Sampling::FirstK).unwrap();
        assert_eq!(split.train_indices, vec![0, 1]);
        assert_eq!(split.test_indices, vec![2, 3]);
        assert_eq!(split.train.y.to_vec(), vec!["a", "b"]);
        assert_eq!(split.test.x.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn training_size_rounds_down() {
        let recs = records(&[&["0", "0"], &["1", "1"], &["2", "0"]]);
        let split = split_records(&recs, 0.7, Sampling::FirstK).unwrap();
        assert_eq!(split.train.len(), 2);
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn proportion_bounds_are_checked() {
        let recs = records(&[&["0", "0"]]);
        for p in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(matches!(
                split_records(&recs, p, Sampling::FirstK),
                Err(HarnessError::InvalidProportion(_))
            ));
        }
    }

    #[test]
    fn empty_records_are_rejected() {
        assert!(matches!(
            split_records(&[], 0.7, Sampling::FirstK),
            Err(HarnessError::EmptyDataset)
        ));
    }

    #[test]
    fn dataset_new_checks_label_count() {
        let x = Array2::from_shape_vec((2, 1), vec![0.0, 1.0]).unwrap();
        let y = Array1::from_vec(vec!["0".to_string()]);
        assert!(matches!(Dataset::new(x, y), Err(HarnessError::Shape(_))));
    }
}
