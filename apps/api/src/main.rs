mod config;
mod directory;
mod errors;
mod llm_client;
mod pitch;
mod routes;
mod sessions;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::JournalistDirectory;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pitchdesk API v{}", env!("CARGO_PKG_VERSION"));

    // Load the journalist roster once; all sessions share it read-only
    let directory = JournalistDirectory::load(&config.journalists_csv).with_context(|| {
        format!(
            "Failed to load journalist roster from {}",
            config.journalists_csv
        )
    })?;
    if directory.is_empty() {
        warn!(
            "Journalist roster {} has no rows — matching and selection will find nothing",
            config.journalists_csv
        );
    }

    // Initialize the completion client with the startup credential
    let llm = OpenAiClient::new(config.openai_api_key.clone());
    info!("Completion client initialized (model: {})", config.openai_model);

    // Build app state
    let state = AppState {
        directory: Arc::new(directory),
        llm: Arc::new(llm),
        sessions: SessionStore::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
