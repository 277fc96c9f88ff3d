use crate::config::{ModelConfig, ModelType};
use crate::error::Result;
use crate::models::classifier_trait::Classifier;
use crate::models::knn::KnnClassifier;
use crate::models::random::RandomClassifier;

/// Build a boxed classifier from a `ModelConfig`.
pub fn build_model(params: &ModelConfig) -> Result<Box<dyn Classifier>> {
    match &params.model_type {
        ModelType::Random { seed } => Ok(Box::new(RandomClassifier::new(*seed))),
        ModelType::KNN { k, distance } => Ok(Box::new(KnnClassifier::new(*k, *distance)?)),
    }
}
