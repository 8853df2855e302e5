//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema bootstrap and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::AliasRepository;
use crate::infrastructure::persistence::PgAliasRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Number of connection attempts made before startup fails.
const CONNECT_ATTEMPTS: usize = 5;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (retried with backoff)
/// - `url` table and index (idempotent)
/// - Axum HTTP server with graceful shutdown
///
/// The pool is created here and closed after the server stops, so its
/// lifetime matches the process.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    let repository = Arc::new(PgAliasRepository::new(Arc::new(pool.clone())));
    repository
        .ensure_schema()
        .await
        .context("Failed to create schema")?;
    tracing::info!("Schema ready");

    let state = AppState::new(repository);
    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped, database pool closed");

    Ok(())
}

/// Opens the connection pool, retrying transient failures with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error after [`CONNECT_ATTEMPTS`] attempts.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    // 200ms, 400ms, 800ms, ... capped at 5s.
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(CONNECT_ATTEMPTS - 1);

    let pool = Retry::start(strategy, || {
        let options = options.clone();
        let url = config.database_url.as_str();
        async move {
            options.connect(url).await.inspect_err(|e| {
                tracing::warn!(error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
