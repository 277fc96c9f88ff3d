//! clfbench-classifiers: an evaluation harness for binary classifiers.
//!
//! This crate loads labeled comma-separated datasets, splits them into
//! training and test partitions, fits classifiers implementing the
//! [`models::Classifier`] contract (a seeded random baseline and a brute-force
//! k-nearest-neighbors model), scores their predictions and ranks the results
//! on a [`leaderboard::Leaderboard`].
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod leaderboard;
pub mod math;
pub mod metrics;
pub mod models;

pub use error::{HarnessError, Result};
