//! A single folder node and its owned subdirectory.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use mailhub_core::types::{AccountId, FolderId};
use mailhub_entity::folder::Folder;

use crate::directory::{DirectoryContext, FolderDirectory};

/// One mailbox folder in the hierarchy.
///
/// A node is an immutable snapshot of its persisted row plus exactly one
/// owned [`FolderDirectory`] holding its direct subfolders. Nodes are handed
/// to callers as `Arc` snapshots: a node returned from a lookup stays usable
/// even after a later refresh drops the directory's own reference to it.
pub struct FolderNode {
    folder: Folder,
    subfolders: FolderDirectory,
}

impl FolderNode {
    pub(crate) fn new(folder: Folder, ctx: Arc<DirectoryContext>) -> Self {
        let subfolders = FolderDirectory::child_of(folder.account_id, folder.id, ctx);
        Self { folder, subfolders }
    }

    /// The durable folder id assigned by the store.
    pub fn id(&self) -> FolderId {
        self.folder.id
    }

    /// The owning account.
    pub fn account_id(&self) -> AccountId {
        self.folder.account_id
    }

    /// The parent folder id, [`FolderId::NONE`] at the top level.
    pub fn parent_id(&self) -> FolderId {
        self.folder.parent_id
    }

    /// The folder name.
    pub fn name(&self) -> &str {
        &self.folder.name
    }

    /// Client-visible subscription state.
    pub fn is_subscribed(&self) -> bool {
        self.folder.is_subscribed
    }

    /// IMAP UID high-water mark for messages in this folder.
    pub fn current_uid(&self) -> i64 {
        self.folder.current_uid
    }

    /// When the folder was created.
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.folder.created_at
    }

    /// The persisted record backing this node.
    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    /// The directory of this node's direct subfolders.
    pub fn subfolders(&self) -> &FolderDirectory {
        &self.subfolders
    }

    /// Compare this node's name against `name` under the store's
    /// case-insensitive collation.
    pub fn name_matches(&self, name: &str) -> bool {
        self.folder.name_matches(name)
    }
}

impl fmt::Debug for FolderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderNode")
            .field("id", &self.folder.id)
            .field("account_id", &self.folder.account_id)
            .field("parent_id", &self.folder.parent_id)
            .field("name", &self.folder.name)
            .finish_non_exhaustive()
    }
}
