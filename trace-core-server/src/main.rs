//! Batch traceability server.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! trace-server --config config/trace-server.yaml
//!
//! # With environment variables only
//! TRACE_AUTH__JWT_SECRET=change-me TRACE_DATABASE__URL=postgresql://... trace-server
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing::{error, info};

use trace_core_postgres::init_database;
use trace_core_server::logging::{init_logging, LoggingConfig};
use trace_core_server::{create_router, AppState, JwtAuthGate, ServerConfig};

/// Agricultural batch traceability server
#[derive(Parser, Debug)]
#[command(name = "trace-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "TRACE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::from_env()?,
    };

    init_logging(LoggingConfig::from(&config.logging));
    info!(version = env!("CARGO_PKG_VERSION"), "Starting trace server");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    info!(max_connections = config.database.max_connections, "Connected to PostgreSQL");

    if config.database.init_schema {
        init_database(&pool).await?;
    }

    let auth_gate = Arc::new(JwtAuthGate::new(&config.auth.jwt_secret));
    let state = Arc::new(AppState::new(pool.clone(), auth_gate));
    let router = create_router(state, &config.cors, config.server.body_limit_bytes);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    info!("Trace server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
