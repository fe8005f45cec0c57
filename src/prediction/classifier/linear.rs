use super::{Classifier, check_width};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Linear support vector classifier. Exposes a decision but no probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvc {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn default_threshold() -> f64 {
    0.5
}

fn decision(coefficients: &[f64], intercept: f64, features: &[f64]) -> Result<f64> {
    check_width(coefficients.len(), features)?;
    let score = coefficients
        .iter()
        .zip(features)
        .map(|(w, x)| w * x)
        .sum::<f64>()
        + intercept;
    if !score.is_finite() {
        return Err(Error::inference(format!("decision score is not finite: {}", score)));
    }
    Ok(score)
}

fn validate_weights(coefficients: &[f64], intercept: f64) -> Result<()> {
    if coefficients.is_empty() {
        return Err(Error::model_load("linear model has no coefficients"));
    }
    if !intercept.is_finite() || coefficients.iter().any(|w| !w.is_finite()) {
        return Err(Error::model_load("linear model has non-finite weights"));
    }
    Ok(())
}

impl LogisticRegression {
    pub(crate) fn validate(&self) -> Result<()> {
        validate_weights(&self.coefficients, self.intercept)?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::model_load(format!(
                "threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        Ok(())
    }

    fn probability(&self, features: &[f64]) -> Result<f64> {
        let score = decision(&self.coefficients, self.intercept, features)?;
        Ok(1.0 / (1.0 + (-score).exp()))
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn predict(&self, features: &[f64]) -> Result<u8> {
        Ok(u8::from(self.probability(features)? > self.threshold))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>> {
        self.probability(features).map(Some)
    }
}

impl LinearSvc {
    pub(crate) fn validate(&self) -> Result<()> {
        validate_weights(&self.coefficients, self.intercept)
    }
}

impl Classifier for LinearSvc {
    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn predict(&self, features: &[f64]) -> Result<u8> {
        let score = decision(&self.coefficients, self.intercept, features)?;
        Ok(u8::from(score > 0.0))
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Option<f64>> {
        Ok(None)
    }
}
