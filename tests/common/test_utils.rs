use illness_insight::{
    chat::ConversationBridge,
    config::{Config, LlmConfig, LogsConfig, ModelsConfig, ServerConfig, default_fallback_message},
    llm::LlmClient,
    prediction::{Category, ClassifierRegistry, PredictionGateway, PredictionRequest},
    server::AppState,
};
use serde_json::{Map, Value, json};
use std::{path::Path, sync::Arc};
use tempfile::TempDir;

pub const FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Create a test configuration with sensible defaults
pub fn create_test_config(models_dir: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            cors_origins: vec!["*".to_string()],
        },
        llm: create_test_llm_config(),
        models: ModelsConfig {
            dir: models_dir.to_string(),
            ..ModelsConfig::default()
        },
    }
}

pub fn create_test_llm_config() -> LlmConfig {
    LlmConfig {
        base_url: String::new(),
        api_key: "test-api-key".to_string(),
        model: "gemini-2.0-flash".to_string(),
        system_prompt: Some("You are a helpful health assistant.".to_string()),
        temperature: None,
        max_tokens: None,
        fallback_message: default_fallback_message(),
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_model(dir: &Path, file_name: &str, model: &Value) {
    std::fs::write(dir.join(file_name), model.to_string()).expect("Failed to write model file");
}

/// Logistic model of the given width whose score is `sum(x) * weight + intercept`
pub fn logistic_model(width: usize, weight: f64, intercept: f64) -> Value {
    json!({
        "type": "logistic_regression",
        "coefficients": vec![weight; width],
        "intercept": intercept
    })
}

/// Linear SVC without probability output
pub fn svc_model(width: usize, weight: f64, intercept: f64) -> Value {
    json!({
        "type": "linear_svc",
        "coefficients": vec![weight; width],
        "intercept": intercept
    })
}

/// Writes a valid model for every category into a fresh directory
pub fn create_models_dir() -> TempDir {
    let dir = create_temp_dir();
    for category in Category::ALL {
        let width = category.schema().len();
        let file = ModelsConfig::default().file_for(category).to_string();
        write_model(dir.path(), &file, &logistic_model(width, 0.01, -2.0));
    }
    dir
}

pub fn heart_fields() -> Value {
    json!({
        "age": 63, "gender": 1, "cp": 1, "trestbps": 145, "chol": 233, "fbs": 1,
        "restecg": 2, "thalach": 150, "exang": 0, "oldpeak": 2.3, "slope": 3, "ca": 0,
        "thal": 1
    })
}

pub fn diabetes_fields() -> Value {
    json!({
        "pregnancies": 6, "glucose": 148, "bloodPressure": 72, "skinThickness": 35,
        "insulin": 0, "bmi": 33.6, "diabetesPedigree": 0.627, "age": 50
    })
}

pub fn cancer_fields() -> Value {
    json!({
        "radius_mean": 17.99, "texture_mean": 10.38, "perimeter_mean": 122.8,
        "area_mean": 1001.0, "smoothness_mean": 0.1184, "compactness_mean": 0.2776,
        "concavity_mean": 0.3001, "concave_points_mean": 0.1471, "symmetry_mean": 0.2419,
        "fractal_dimension_mean": 0.07871, "radius_se": 1.095, "texture_se": 0.9053,
        "perimeter_se": 8.589, "area_se": 153.4, "smoothness_se": 0.006399,
        "compactness_se": 0.04904, "concavity_se": 0.05373, "concave_points_se": 0.01587,
        "symmetry_se": 0.03003, "fractal_dimension_se": 0.006193, "radius_worst": 25.38,
        "texture_worst": 17.33
    })
}

pub fn fields_for(category: Category) -> Value {
    match category {
        Category::Heart => heart_fields(),
        Category::Diabetes => diabetes_fields(),
        Category::Cancer => cancer_fields(),
    }
}

pub fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn request_for(category: Category) -> PredictionRequest {
    PredictionRequest::new(category, as_map(fields_for(category)))
}

pub fn create_app_state(registry: ClassifierRegistry, llm_client: Arc<dyn LlmClient>) -> AppState {
    AppState {
        gateway: Arc::new(PredictionGateway::new(Arc::new(registry))),
        bridge: Arc::new(ConversationBridge::with_client(
            llm_client,
            create_test_llm_config(),
        )),
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8000
  cors_origins: ["http://localhost:3000"]
  logs:
    level: "debug"

llm:
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  api_key: "test-api-key"
  model: "gemini-2.0-flash"
  system_prompt: "You are a helpful health assistant."
  temperature: 0.4
  max_tokens: 512

models:
  dir: "/var/lib/illness-insight/models"
  cancer: "breast_cancer_rf.json"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  temperature: "warm"
"#;
