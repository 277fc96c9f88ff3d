//! Small ndarray-like types and distance functions used throughout the crate.
//!
//! Provides `Array2` (row-major feature matrix) and `Array1` (label vector)
//! with shape-checked construction, plus the distance strategies consumed by
//! neighbor-based classifiers.
pub mod distance;
pub mod matrix;
pub mod vector;

pub use distance::{euclidean, manhattan, DistanceMetric};
pub use matrix::Array2;
pub use vector::Array1;
