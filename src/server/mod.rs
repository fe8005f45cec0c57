pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    chat::ConversationBridge,
    config::Config,
    prediction::{ClassifierRegistry, PredictionGateway},
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use handlers::AppState;

pub async fn run(config: Config) -> Result<()> {
    // Load classifiers once; they are shared read-only from here on
    let registry = ClassifierRegistry::load(&config.models).await;
    let gateway = PredictionGateway::new(Arc::new(registry));

    let bridge = ConversationBridge::new(config.llm.clone());

    let app_state = AppState {
        gateway: Arc::new(gateway),
        bridge: Arc::new(bridge),
    };

    let app = router(app_state).layer(cors_layer(&config.server.cors_origins)?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/predict/heart-disease", post(handlers::predict_heart_disease))
        .route("/predict/diabetes", post(handlers::predict_diabetes))
        .route("/predict/cancer", post(handlers::predict_cancer))
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| Error::config(format!("Invalid CORS origin: '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_wildcard_and_lists() {
        assert!(cors_layer(&["*".to_string()]).is_ok());
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let result = cors_layer(&["http://bad\norigin".to_string()]);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
