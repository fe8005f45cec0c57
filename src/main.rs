use anyhow::Result;
use illness_insight::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is configured from the file, so it has to load first
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.server.logs) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Starting IllnessInsight API server (log level {}, models from {})",
        config.server.logs.level, config.models.dir
    );

    server::run(config).await?;

    Ok(())
}
