//! Mail store schema migrations.

use sqlx::PgPool;
use tracing::info;

use mailhub_core::error::{AppError, ErrorKind};

/// Bring the mail store schema up to date.
///
/// Applies the embedded migrations (the `imap_folders` table and its
/// indexes) in order; already-applied steps are skipped. Run once at
/// startup before any repository touches the pool.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying mail store migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Mail store migration failed: {e}"),
                e,
            )
        })?;

    info!("Mail store schema is up to date");
    Ok(())
}
