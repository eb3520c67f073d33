use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

use crate::config::DatabaseConfig;

/// Open the connection pool and verify the database answers a ping
///
/// The pool is shared by every request; no extra locking is layered on top.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    pool.acquire().await?.ping().await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}
