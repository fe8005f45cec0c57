use super::{
    Category, Prediction, ProbabilitySource,
    classifier::{Classifier, load_model},
};
use crate::{Error, Result, config::ModelsConfig};
use std::{collections::HashMap, path::Path, sync::Arc};
use tracing::{error, info};

/// Probability reported for classifiers without a probability output.
/// A crude stand-in, not a calibrated estimate.
pub const FALLBACK_POSITIVE_PROBABILITY: f64 = 0.5;
pub const FALLBACK_NEGATIVE_PROBABILITY: f64 = 0.0;

/// Immutable set of loaded classifiers, one per available category.
#[derive(Clone, Default)]
pub struct ClassifierRegistry {
    handles: HashMap<Category, Arc<dyn Classifier>>,
}

impl ClassifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every category's model. A failure only disables that category.
    pub async fn load(config: &ModelsConfig) -> Self {
        let mut registry = Self::new();

        for category in Category::ALL {
            let path = Path::new(&config.dir).join(config.file_for(category));
            let loaded = load_model(&path).await.and_then(|classifier| {
                registry.insert(category, classifier)
            });

            match loaded {
                Ok(()) => info!("Loaded {} model from {}", category, path.display()),
                Err(e) => error!("{} predictions disabled: {}", category, e),
            }
        }

        info!(
            "Classifier registry ready with {} of {} models",
            registry.handles.len(),
            Category::ALL.len()
        );

        registry
    }

    /// Registers a classifier after checking its input width against the category schema.
    pub fn insert(&mut self, category: Category, classifier: Arc<dyn Classifier>) -> Result<()> {
        let schema = category.schema();
        if let Some(width) = classifier.n_features() {
            if width != schema.len() {
                return Err(Error::model_load(format!(
                    "{} model expects {} features but schema v{} has {}",
                    category,
                    width,
                    schema.version,
                    schema.len()
                )));
            }
        }
        self.handles.insert(category, classifier);
        Ok(())
    }

    pub fn with_classifier(
        mut self,
        category: Category,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self> {
        self.insert(category, classifier)?;
        Ok(self)
    }

    pub fn is_available(&self, category: Category) -> bool {
        self.handles.contains_key(&category)
    }

    pub fn available(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_available(*c))
            .collect()
    }

    pub fn invoke(&self, category: Category, features: &[f64]) -> Result<Prediction> {
        let classifier = self
            .handles
            .get(&category)
            .ok_or(Error::ModelUnavailable { category })?;

        let label = classifier
            .predict(features)
            .map_err(|e| inference_error(category, e))?;
        if label > 1 {
            return Err(Error::inference(format!(
                "{} model returned non-binary label {}",
                category, label
            )));
        }

        let estimate = classifier
            .predict_proba(features)
            .map_err(|e| inference_error(category, e))?;

        let (probability, source) = match estimate {
            Some(p) if (0.0..=1.0).contains(&p) => (p, ProbabilitySource::Model),
            Some(p) => {
                return Err(Error::inference(format!(
                    "{} model returned probability {} outside [0, 1]",
                    category, p
                )));
            }
            None if label == 1 => (FALLBACK_POSITIVE_PROBABILITY, ProbabilitySource::Fallback),
            None => (FALLBACK_NEGATIVE_PROBABILITY, ProbabilitySource::Fallback),
        };

        Ok(Prediction {
            label,
            probability,
            source,
        })
    }
}

fn inference_error(category: Category, e: Error) -> Error {
    match e {
        Error::Inference(msg) => Error::inference(format!("{} model: {}", category, msg)),
        other => Error::inference(format!("{} model: {}", category, other)),
    }
}
