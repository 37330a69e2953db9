use std::sync::Arc;

use anyhow::Result;
use resume_analyzer::completion::{CompletionBackend, GeminiClient};
use resume_analyzer::config::AnalyzerConfig;
use resume_analyzer::start_web_server;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_analyzer=info,rocket::server=off")),
        )
        .init();

    let config = AnalyzerConfig::from_env()?;

    info!("Starting resume skills analyzer");
    info!("Completion model: {}", config.model);
    info!("Skills per analysis: {}", config.skill_count);
    if config.dev_mode {
        info!("Dev mode enabled: error responses include failure detail");
    }

    let backend: Arc<dyn CompletionBackend> = Arc::new(GeminiClient::new(&config)?);

    start_web_server(config, backend).await
}
