//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema migrations, and the Axum server lifecycle.

use crate::application::services::MappingService;
use crate::config::{Config, DatabaseConfig};
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Builds a lazily-connecting PostgreSQL pool.
///
/// No connection is opened until the first query, so the service can start
/// while the database is still unreachable.
///
/// # Errors
///
/// Returns an error if the database URL cannot be parsed.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy(&config.url)
        .context("Invalid database URL")
}

/// Applies embedded migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations (when enabled)
/// - Mapping service and router
/// - Axum HTTP server with graceful shutdown
///
/// A database that is down at startup is logged, not fatal; `/status` keeps
/// reporting it until it comes back.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = create_pool(&config.database)?;

    if config.run_migrations {
        match run_migrations(&pool).await {
            Ok(()) => tracing::info!("Database schema is up to date"),
            Err(e) => tracing::error!("Database initialization failed: {:#}", e),
        }
    }

    let pool = Arc::new(pool);
    let repository = Arc::new(PgMappingRepository::new(pool.clone()));
    let mapping_service = Arc::new(MappingService::new(
        repository,
        config.validation_limits(),
    ));

    if mapping_service.check_alive().await {
        tracing::info!("Connected to database");
    } else {
        tracing::error!("Database health check failed; serving anyway");
    }

    let state = AppState::new(mapping_service);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Application shutdown, database connections closed");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
