use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::api::{self, AppState};
use crate::config::{Config, ConfigError, StorageBackend};
use crate::domain::repositories::UserRepository;
use crate::infrastructure::repositories::{InMemoryUserRepository, PostgresUserRepository};

/// Errors that stop the server from starting or keep it from running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the repository adapter selected by `config`.
///
/// For Postgres this connects the pool and, unless disabled, applies the
/// bundled migrations.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn UserRepository>, ServerError> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory user storage");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            tracing::info!("Database connected successfully");

            if config.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PostgresUserRepository::new(pool)))
        }
    }
}

/// Serves the API until a shutdown signal arrives.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let repo = build_repository(&config).await?;
    let app = api::router(AppState::new(repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
