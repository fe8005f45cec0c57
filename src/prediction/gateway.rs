use super::{ClassifierRegistry, PredictionRequest, PredictionResponse, assembler};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Validates a request, runs the category's classifier and shapes the response.
#[derive(Clone)]
pub struct PredictionGateway {
    registry: Arc<ClassifierRegistry>,
}

impl PredictionGateway {
    pub fn new(registry: Arc<ClassifierRegistry>) -> Self {
        Self { registry }
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let category = request.category;
        let features = assembler::assemble(request)?;

        if !self.registry.is_available(category) {
            return Err(Error::ModelUnavailable { category });
        }

        debug!("Invoking {} model with {} features", category, features.len());
        let prediction = self.registry.invoke(category, &features)?;

        Ok(PredictionResponse::from_prediction(category, prediction))
    }
}
