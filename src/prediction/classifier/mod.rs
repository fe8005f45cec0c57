//! Pre-trained binary classifiers and their on-disk format.
//!
//! Models are exported by the training pipeline as JSON documents tagged by
//! `type`. Each one is validated on load and then never mutated.

mod linear;
mod tree;

pub use linear::{LinearSvc, LogisticRegression};
pub use tree::{DecisionTree, RandomForest, TreeNode};

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};
use tracing::debug;

/// A loaded binary classifier. Label `1` is the positive (at-risk) class.
pub trait Classifier: Send + Sync {
    /// Input width the model was trained on, if the format records it.
    fn n_features(&self) -> Option<usize>;

    fn predict(&self, features: &[f64]) -> Result<u8>;

    /// Positive-class probability, or `None` when the model has no probability output.
    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    LogisticRegression(LogisticRegression),
    LinearSvc(LinearSvc),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl ModelSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ModelSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<()> {
        match self {
            ModelSpec::LogisticRegression(m) => m.validate(),
            ModelSpec::LinearSvc(m) => m.validate(),
            ModelSpec::DecisionTree(m) => m.validate(),
            ModelSpec::RandomForest(m) => m.validate(),
        }
    }

    pub fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            ModelSpec::LogisticRegression(m) => Arc::new(m),
            ModelSpec::LinearSvc(m) => Arc::new(m),
            ModelSpec::DecisionTree(m) => Arc::new(m),
            ModelSpec::RandomForest(m) => Arc::new(m),
        }
    }
}

pub async fn load_model(path: &Path) -> Result<Arc<dyn Classifier>> {
    debug!("Loading classifier from: {}", path.display());

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::model_load(format!("cannot read {}: {}", path.display(), e)))?;
    let spec = ModelSpec::from_json(&json)
        .map_err(|e| Error::model_load(format!("invalid model {}: {}", path.display(), e)))?;

    Ok(spec.into_classifier())
}

pub(crate) fn check_width(expected: usize, features: &[f64]) -> Result<()> {
    if features.len() != expected {
        return Err(Error::inference(format!(
            "expected {} features, got {}",
            expected,
            features.len()
        )));
    }
    Ok(())
}
