use crate::{Error, Result, config::LogsConfig};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })
}

/// Builds the filter from `RUST_LOG` directives, or the configured level when
/// they are absent or unparsable. The configured level is always validated.
pub fn env_filter(logs: &LogsConfig, rust_log: Option<&str>) -> Result<EnvFilter> {
    let level = parse_level(&logs.level)?;

    let from_env = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok());

    match from_env {
        Some(filter) => Ok(filter),
        None => EnvFilter::try_new(level.to_string())
            .map_err(|e| Error::config(format!("Invalid log filter: {}", e))),
    }
}

/// Installs the JSON subscriber for the process.
pub fn init(logs: &LogsConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(logs, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialise logging: {}", e)))
}
