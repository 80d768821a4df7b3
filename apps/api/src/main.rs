use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use atsforge::config::Config;
use atsforge::llm_client;
use atsforge::routes::build_router;
use atsforge::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{0}={1},{0}_api={1}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting atsforge API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone())?;
    match &state.llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => info!("ANTHROPIC_API_KEY not set; using heuristic analysis only"),
    }
    info!(
        "Default theme: {}, upload limit: {} MB",
        state.theme(None).id,
        config.max_upload_mb
    );

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict CORS origins once the web client is deployed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
