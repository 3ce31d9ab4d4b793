//! HTTP backend entry point.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_backend::api::{create_router, AppState};
use hello_backend::config::{Config, LogFormat};
use hello_backend::metrics::HttpMetrics;
use hello_backend::utils::shutdown_signal;

/// Minimal HTTP backend with health probes, an info API and Prometheus metrics.
///
/// Configured through `APP_ENV`, `PORT`, `LOG_FORMAT` and `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "hello-backend")]
#[command(version)]
struct Args {}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // Logging needs LOG_FORMAT, but config errors must still be logged
    let config = Config::load();
    init_logging(
        config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_default(),
    );

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        hello_backend::ServiceError::from(e)
    })?;

    run(config).await?;
    Ok(())
}

/// Build the service from `config` and serve until a shutdown signal.
async fn run(config: Config) -> hello_backend::Result<()> {
    info!(
        "Starting application in {} mode on port {}",
        config.app_env, config.port
    );

    let metrics = HttpMetrics::new(&config.app_env).map_err(|e| {
        error!("Failed to build metrics recorder: {}", e);
        e
    })?;

    let addr = config.listen_addr();
    let app_state = AppState::new(config, metrics);
    let router = create_router(app_state);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
