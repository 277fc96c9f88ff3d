pub mod classifier_trait;
pub mod factory;
pub mod knn;
pub mod random;

pub use classifier_trait::Classifier;
pub use knn::KnnClassifier;
pub use random::RandomClassifier;
