use caresheet::FontLibrary;
use caresheet_service::{build_router, config::Config, state::AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting caresheet service...");

    let config = Config::load()?;
    tracing::info!("Configuration loaded");

    // Resolve a measurement font once at startup; fail fast if none exists.
    let library = FontLibrary::default();
    let measurer = library
        .measurer()
        .map_err(|e| anyhow::anyhow!("No measurement font available: {}", e))?;
    tracing::info!("Measurement font resolved");

    let state = AppState::new(Arc::new(measurer), config.clone());
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("caresheet service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /api/v1/profile-sheets");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,caresheet_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
