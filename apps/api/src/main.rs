mod config;
mod errors;
mod job_fit;
mod llm_client;
mod models;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::job_fit::analyzer::JobFitAnalyzer;
use crate::job_fit::jd_parser::LlmJobDescriptionParser;
use crate::job_fit::scoring_config::{
    BuiltinScoringConfig, FileScoringConfig, ScoringConfigSource,
};
use crate::llm_client::LlmClient;
use crate::portfolio::JsonFilePortfolio;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Fit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    // Scoring rules are loaded lazily by the analyzer on first use
    let config_source: Arc<dyn ScoringConfigSource> = match &config.scoring_config_path {
        Some(path) => {
            info!("Scoring rules: {}", path.display());
            Arc::new(FileScoringConfig::new(path.clone()))
        }
        None => {
            info!("Scoring rules: built-in defaults");
            Arc::new(BuiltinScoringConfig)
        }
    };

    info!("Portfolio data: {}", config.portfolio_data_path.display());
    let analyzer = JobFitAnalyzer::new(
        Arc::new(LlmJobDescriptionParser::new(llm)),
        Arc::new(JsonFilePortfolio::new(config.portfolio_data_path.clone())),
        config_source,
    );

    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
