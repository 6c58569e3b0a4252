//! Learning style diagnostic server.
//!
//! Loads configuration from the environment, wires the in-memory session
//! store and filesystem export store, and serves the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use learning_style::adapters::http::{app_router, AssessmentHandlers};
use learning_style::adapters::storage::{FsResultStorage, InMemorySessionRepository};
use learning_style::config::{AppConfig, LogFormat, ServerConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let bank = Arc::new(config.questionnaire.load_bank()?);
    tracing::info!(
        questions = bank.len(),
        source = ?config.questionnaire.bank_path,
        "Question bank loaded"
    );

    let handlers = AssessmentHandlers::wire(
        Arc::new(InMemorySessionRepository::new()),
        bank,
        Arc::new(FsResultStorage::new(&config.export.dir)),
    );
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
