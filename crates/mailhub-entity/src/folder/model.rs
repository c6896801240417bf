//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mailhub_core::types::{AccountId, FolderId};

/// One IMAP folder row as persisted in the `imap_folders` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Durable identifier, assigned by the store on creation.
    pub id: FolderId,
    /// Owning account; [`AccountId::PUBLIC`] for the shared namespace.
    pub account_id: AccountId,
    /// Parent folder, [`FolderId::NONE`] for top-level folders.
    pub parent_id: FolderId,
    /// Folder name, unique among siblings under case-insensitive comparison.
    pub name: String,
    /// Client-visible subscription state.
    pub is_subscribed: bool,
    /// IMAP UID high-water mark for messages in this folder. Unsigned in
    /// the protocol, stored as BIGINT.
    pub current_uid: i64,
    /// When the folder was created. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this folder sits at the top level of its account (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this folder belongs to the shared/public namespace.
    pub fn is_public(&self) -> bool {
        self.account_id.is_public()
    }

    /// Compare this folder's name against `name` using the store's
    /// case-insensitive name collation.
    pub fn name_matches(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

/// Case-insensitive folder-name equality, matching the collation the store
/// uses for name comparisons elsewhere.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Data required to create a new folder.
///
/// `account_id` and `parent_id` start at their sentinels; the directory
/// that owns the new folder stamps them before the row is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Owning account, stamped by the owning directory.
    pub account_id: AccountId,
    /// Parent folder, stamped by the owning directory.
    pub parent_id: FolderId,
    /// Folder name.
    pub name: String,
    /// Initial subscription state.
    pub is_subscribed: bool,
}

impl CreateFolder {
    /// Prepare a folder for creation under a yet-unknown owner.
    pub fn new(name: impl Into<String>, is_subscribed: bool) -> Self {
        Self {
            account_id: AccountId::PUBLIC,
            parent_id: FolderId::NONE,
            name: name.into(),
            is_subscribed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_root() {
        let mut folder = sample();
        assert!(!folder.is_root());
        folder.parent_id = FolderId::NONE;
        assert!(folder.is_root());
    }

    #[test]
    fn test_name_collation_is_case_insensitive() {
        assert!(names_equal("INBOX", "inbox"));
        assert!(names_equal("Entwürfe", "entwürfe"));
        assert!(!names_equal("Inbox", "Inbox.Sent"));
    }

    #[test]
    fn test_serializes_ids_as_plain_integers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["parent_id"], 1);
    }

    fn sample() -> Folder {
        Folder {
            id: FolderId(3),
            account_id: AccountId(7),
            parent_id: FolderId(1),
            name: "Drafts".to_string(),
            is_subscribed: true,
            current_uid: 0,
            created_at: Utc::now(),
        }
    }
}
