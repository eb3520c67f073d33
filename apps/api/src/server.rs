use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PostgresEmployeeRepository;

/// Fatal startup and serving failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Server failed: {0}")]
    Serve(std::io::Error),
}

/// Connect to the database, wire the router and serve until the listener fails
pub async fn run(config: Config) -> Result<(), ServerError> {
    let pool = database::connect(&config.database).await?;

    let state = AppState::new(Arc::new(PostgresEmployeeRepository::new(pool)));
    let app = create_router(state, &config.assets_dir);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen_addr,
            source,
        })?;

    tracing::info!("Server listening on {}", config.listen_addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
