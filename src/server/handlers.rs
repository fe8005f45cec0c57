use super::types::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, WelcomeResponse};
use crate::{
    Error,
    chat::ConversationBridge,
    prediction::{Category, PredictionGateway, PredictionRequest, PredictionResponse},
};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<PredictionGateway>,
    pub bridge: Arc<ConversationBridge>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to IllnessInsight API".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn predict_heart_disease(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<PredictionResponse>, ApiError> {
    predict(&state, Category::Heart, fields)
}

pub async fn predict_diabetes(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<PredictionResponse>, ApiError> {
    predict(&state, Category::Diabetes, fields)
}

pub async fn predict_cancer(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<PredictionResponse>, ApiError> {
    predict(&state, Category::Cancer, fields)
}

fn predict(
    state: &AppState,
    category: Category,
    fields: Map<String, Value>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let request = PredictionRequest::new(category, fields);

    match state.gateway.predict(&request) {
        Ok(response) => {
            info!(
                %request_id,
                "{} prediction made: {} with probability {}",
                category, response.prediction, response.probability
            );
            Ok(Json(response))
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(%request_id, "Error in {} prediction: {}", category, e);
            } else {
                warn!(%request_id, "Rejected {} prediction: {}", category, e);
            }
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!(
        "Received chat message ({} chars, {} history turns)",
        request.message.len(),
        request.history.len()
    );

    let response = state.bridge.send(&request.message, &request.history).await;

    Json(ChatResponse { response })
}

pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::ModelUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
