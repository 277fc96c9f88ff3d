use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by the evaluation harness.
#[derive(Debug)]
pub enum HarnessError {
    /// The dataset file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The delimited structure of the dataset is malformed.
    Parse { path: PathBuf, message: String },
    /// Vector lengths or matrix/label counts disagree.
    Shape(String),
    /// `predict` was called before `fit`.
    NotFitted(&'static str),
    /// Neighbor count is zero, or exceeds the training rows once fitted.
    InvalidK { k: usize, n_train: Option<usize> },
    /// Training proportion outside the open interval (0, 1).
    InvalidProportion(f64),
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, HarnessError>;

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "Failed to read dataset {}: {}", path.display(), source)
            }
            HarnessError::Parse { path, message } => {
                write!(f, "Malformed dataset {}: {}", path.display(), message)
            }
            HarnessError::Shape(msg) => write!(f, "Shape mismatch: {}", msg),
            HarnessError::NotFitted(model) => {
                write!(f, "{} classifier must be fitted before predicting", model)
            }
            HarnessError::InvalidK { k, n_train: None } => {
                write!(f, "Neighbor count must be at least 1, got k={}", k)
            }
            HarnessError::InvalidK { k, n_train: Some(n) } => write!(
                f,
                "Neighbor count k={} exceeds the {} stored training rows",
                k, n
            ),
            HarnessError::InvalidProportion(p) => {
                write!(f, "Training proportion must lie in (0, 1), got {}", p)
            }
            HarnessError::EmptyDataset => write!(f, "Dataset contains no records"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
