//! climate-api - read-only HTTP API over a fixed climate dataset
//!
//! This is the main entry point for the climate-api application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use climate_api::data_loader::load_sqlite;
use climate_api::handlers::router;
use climate_api::{init_tracing, ClimateError, Config, Result};

fn main() -> Result<()> {
    // Load configuration
    let (config, database_path) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.enable_all().build()?;

    runtime.block_on(serve(config, database_path))
}

async fn serve(config: Config, database_path: std::path::PathBuf) -> Result<()> {
    info!("Loading store: {:?}", database_path);

    // Read both tables and create application state
    let app_state = load_sqlite(&database_path, config.clone())
        .await
        .map_err(|e| {
            error!("Failed to load store: {}", e);
            e
        })?;

    app_state.validate().map_err(|e| {
        error!("Invalid application state: {}", e);
        e
    })?;

    let window = app_state.dataset.reference();
    info!(
        "Reference window {} to {}, {} measurements, {} stations",
        window.start,
        window.latest,
        app_state.dataset.measurement_count(),
        app_state.dataset.station_count()
    );

    let app = router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
