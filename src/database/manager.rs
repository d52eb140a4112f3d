use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::filter::FilterError;

/// Errors from the record-access layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Pool construction and connectivity checks
pub struct DatabaseManager;

impl DatabaseManager {
    fn pool_options(config: &AppConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
    }

    /// Open a pool and verify the server answers.
    pub async fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
        let pool = Self::pool_options(config).connect(&config.database_url()).await?;
        info!("Connected database pool (max {} connections)", config.database.max_connections);
        Ok(pool)
    }

    /// Build a pool that opens connections on first use.
    pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, DatabaseError> {
        Ok(Self::pool_options(config).connect_lazy(&config.database_url())?)
    }

    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}

/// Shared pool handed to handlers through an `Extension` layer
#[derive(Clone)]
pub struct DbPool(pub PgPool);
