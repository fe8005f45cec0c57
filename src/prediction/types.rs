use super::Category;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named numeric fields submitted for one category.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub category: Category,
    pub fields: Map<String, Value>,
}

impl PredictionRequest {
    pub fn new(category: Category, fields: Map<String, Value>) -> Self {
        Self { category, fields }
    }
}

/// Where a reported probability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilitySource {
    /// Positive-class estimate produced by the classifier.
    Model,
    /// Fixed 0.5 / 0.0 stand-in for classifiers without probability output.
    /// Not a calibrated estimate.
    Fallback,
}

/// Raw classifier outcome before it is turned into a response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: u8,
    pub probability: f64,
    pub source: ProbabilitySource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub probability: f64,
    pub message: String,
    pub probability_source: ProbabilitySource,
}

impl PredictionResponse {
    pub fn from_prediction(category: Category, prediction: Prediction) -> Self {
        Self {
            prediction: prediction.label,
            probability: prediction.probability,
            message: category.message(prediction.label),
            probability_source: prediction.source,
        }
    }
}
