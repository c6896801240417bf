//! Persistence gateway for folder rows.

use async_trait::async_trait;

use mailhub_core::result::AppResult;
use mailhub_core::types::AccountId;

use super::model::{CreateFolder, Folder};

/// Row-level access to the persisted folder table.
///
/// The in-memory hierarchy is reconstructed from, and written through, this
/// seam only; it never assumes multi-row transactional guarantees.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// Fetch every folder row owned by `account_id`, ordered ascending by
    /// folder id. Sibling ordering in the reconstructed tree depends on
    /// this ordering.
    async fn list_by_account(&self, account_id: AccountId) -> AppResult<Vec<Folder>>;

    /// Persist a new folder row and return it with the assigned id and
    /// creation time.
    async fn insert(&self, folder: &CreateFolder) -> AppResult<Folder>;
}
