pub mod assembler;
mod category;
pub mod classifier;
mod gateway;
mod registry;
pub mod schema;
mod types;

pub use category::Category;
pub use classifier::Classifier;
pub use gateway::PredictionGateway;
pub use registry::{
    ClassifierRegistry, FALLBACK_NEGATIVE_PROBABILITY, FALLBACK_POSITIVE_PROBABILITY,
};
pub use types::*;
