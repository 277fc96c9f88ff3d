use std::cmp::Ordering;

use crate::error::{HarnessError, Result};
use crate::math::{Array1, Array2, DistanceMetric};
use crate::models::classifier_trait::Classifier;

/// Brute-force k-nearest-neighbors classifier.
///
/// `fit` stores the training rows; `predict` measures every test row against
/// all of them, so one call costs O(N·M) distance evaluations.
///
/// Ties are resolved deterministically at two levels:
/// - training rows at equal distance keep their training order (stable sort);
/// - when several labels share the top vote count, the label appearing
///   earliest among the K nearest neighbors wins.
pub struct KnnClassifier {
    k: usize,
    metric: DistanceMetric,
    train: Option<(Array2<f64>, Array1<String>)>,
}

impl KnnClassifier {
    pub fn new(k: usize, metric: DistanceMetric) -> Result<Self> {
        if k == 0 {
            return Err(HarnessError::InvalidK { k, n_train: None });
        }
        Ok(KnnClassifier {
            k,
            metric,
            train: None,
        })
    }

    /// Training row indices ordered by ascending distance to `query`.
    fn ranked_neighbors(&self, train_x: &Array2<f64>, query: &[f64]) -> Result<Vec<usize>> {
        let distances = train_x
            .rows()
            .map(|row| self.metric.compute(row, query))
            .collect::<Result<Vec<f64>>>()?;

        let mut order: Vec<usize> = (0..distances.len()).collect();
        // `sort_by` is stable: equal distances keep training order.
        order.sort_by(|&a, &b| ascending_nan_last(distances[a], distances[b]));
        Ok(order)
    }
}

/// NaN distances, whatever their sign bit, sort after every other distance.
fn ascending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Majority label among `neighbors`, earliest-ranked label on ties.
fn vote<'a>(neighbors: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    // (label, count) in order of first appearance by distance rank.
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for label in neighbors {
        match tally.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut winner: Option<(&str, usize)> = None;
    for (label, count) in tally {
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((label, count));
        }
    }
    winner.map(|(label, _)| label)
}

impl Classifier for KnnClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<String>) {
        if x.nrows() != y.len() {
            log::warn!(
                "KNN fit received {} rows but {} labels; predictions will fail",
                x.nrows(),
                y.len()
            );
        }
        self.train = Some((x.clone(), y.clone()));
    }

    fn predict(&mut self, x: &Array2<f64>) -> Result<Vec<String>> {
        let (train_x, train_y) = self
            .train
            .as_ref()
            .ok_or(HarnessError::NotFitted("knn"))?;

        if train_x.nrows() != train_y.len() {
            return Err(HarnessError::Shape(format!(
                "stored {} training rows but {} labels",
                train_x.nrows(),
                train_y.len()
            )));
        }
        if self.k > train_y.len() {
            return Err(HarnessError::InvalidK {
                k: self.k,
                n_train: Some(train_y.len()),
            });
        }

        let mut predictions = Vec::with_capacity(x.nrows());
        for query in x.rows() {
            let order = self.ranked_neighbors(train_x, query)?;
            let nearest = order[..self.k].iter().map(|&idx| train_y[idx].as_str());
            let label = vote(nearest).unwrap_or_default();
            predictions.push(label.to_string());
        }
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "knn"
    }
}
