//! IMAP protocol configuration.

use serde::{Deserialize, Serialize};

/// IMAP protocol settings consumed by the folder hierarchy and the
/// protocol engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImapConfig {
    /// Separator used to split and join full mailbox paths
    /// (e.g. `"Inbox.Work"` with the default `"."`).
    #[serde(default = "default_hierarchy_delimiter")]
    pub hierarchy_delimiter: String,
    /// Whether folders created on behalf of a client are subscribed
    /// automatically.
    #[serde(default = "default_true")]
    pub auto_subscribe_created: bool,
}

impl Default for ImapConfig {
    fn default() -> Self {
        Self {
            hierarchy_delimiter: default_hierarchy_delimiter(),
            auto_subscribe_created: default_true(),
        }
    }
}

fn default_hierarchy_delimiter() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}
