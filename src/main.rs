//! HTTP entry point for the person validation service.
//!
//! Usage: `person-validation [CONFIG_PATH]`. Without an argument the
//! bundled `./config/service.yaml` is used, or built-in defaults when that
//! file is absent.

use person_validation::api::{AppState, create_router};
use person_validation::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use person_validation::error::{ServiceError, ServiceResult};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> ServiceResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("person_validation=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    let address = config.server().address();
    let router = create_router(AppState::new(config));

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServiceError::Server {
            message: format!("failed to bind {}: {}", address, e),
        })?;
    info!(address = %address, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServiceError::Server {
            message: e.to_string(),
        })?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
