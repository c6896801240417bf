//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use mailhub_core::error::{AppError, ErrorKind};
use mailhub_core::result::AppResult;
use mailhub_core::types::AccountId;
use mailhub_entity::folder::{CreateFolder, Folder, FolderStore};

/// sqlx-backed [`FolderStore`] over the `imap_folders` table.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn list_by_account(&self, account_id: AccountId) -> AppResult<Vec<Folder>> {
        // Ascending id order is load-bearing: the hierarchy keeps siblings
        // in the order this query returns them.
        sqlx::query_as::<_, Folder>(
            "SELECT id, account_id, parent_id, name, is_subscribed, current_uid, created_at \
             FROM imap_folders WHERE account_id = $1 ORDER BY id ASC",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list account folders", e)
        })
    }

    async fn insert(&self, folder: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO imap_folders (account_id, parent_id, name, is_subscribed, current_uid) \
             VALUES ($1, $2, $3, $4, 0) \
             RETURNING id, account_id, parent_id, name, is_subscribed, current_uid, created_at",
        )
        .bind(folder.account_id)
        .bind(folder.parent_id)
        .bind(&folder.name)
        .bind(folder.is_subscribed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert folder", e))
    }
}
