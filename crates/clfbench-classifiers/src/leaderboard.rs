//! Ranking of named classifier results.
use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::metrics::Metrics;

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub combined: f64,
    pub metrics: Metrics,
}

/// Named evaluation results, kept in insertion order.
///
/// Inserting an existing name replaces its metrics in place, so the entry
/// keeps the position of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<(String, Metrics)>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, metrics: Metrics) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => {
                log::debug!("Replacing leaderboard entry '{}'", name);
                *slot = metrics;
            }
            None => self.entries.push((name, metrics)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Metrics> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, metrics)| metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by combined score, best first.
    ///
    /// The sort is stable, so equal combined scores keep insertion order.
    /// A NaN combined score ranks below every finite score.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ordered: Vec<&(String, Metrics)> = self.entries.iter().collect();
        ordered.sort_by(|(_, a), (_, b)| descending_nan_last(a.combined(), b.combined()));

        ordered
            .into_iter()
            .enumerate()
            .map(|(idx, (name, metrics))| RankedEntry {
                rank: idx + 1,
                name: name.clone(),
                combined: metrics.combined(),
                metrics: *metrics,
            })
            .collect()
    }

    /// Human-readable ranked report, one line per classifier.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Ranked entries as pretty-printed JSON. NaN scores serialize as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.ranked())
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.ranked() {
            writeln!(
                f,
                "{:>2}. {:<20}| combined: {:.4}  {}",
                entry.rank, entry.name, entry.combined, entry.metrics
            )?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, Metrics)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (S, Metrics)>>(iter: I) -> Self {
        let mut board = Leaderboard::new();
        for (name, metrics) in iter {
            board.insert(name, metrics);
        }
        board
    }
}
