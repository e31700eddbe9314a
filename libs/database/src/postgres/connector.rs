use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a pool, retrying with exponential backoff.
///
/// `retry` overrides the policy derived from `DB_CONNECT_RETRIES`.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry = retry.unwrap_or_else(|| config.retry_config());
    let target = config.redacted_url();
    let options = config.into_connect_options();

    let db = retry_with_backoff(|| Database::connect(options.clone()), &retry)
        .await
        .map_err(|source| DatabaseError::ConnectionFailed {
            attempts: retry.attempts(),
            source,
        })?;

    info!(url = %target, "Connected to PostgreSQL");
    Ok(db)
}

/// Apply every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}

/// Close the pool; errors are logged, not returned, since this runs during shutdown.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection closed"),
        Err(e) => error!(error = %e, "Error closing PostgreSQL connection"),
    }
}
