mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;
    apply_env_overrides(&mut config, |key| env::var(key).ok())?;

    Ok(config)
}

/// Applies `PORT`, `MODELS_DIR` and the API key on top of the file contents.
///
/// `LLM_API_KEY` wins over `GOOGLE_API_KEY`, which older `.env` files still set.
pub fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("PORT is not a valid port: '{}'", port)))?;
    }
    if let Some(dir) = lookup("MODELS_DIR") {
        config.models.dir = dir;
    }
    if let Some(key) = lookup("LLM_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
        config.llm.api_key = key;
    }
    Ok(())
}
