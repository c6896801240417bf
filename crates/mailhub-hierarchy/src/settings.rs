//! Live, reloadable IMAP settings source.

use std::sync::RwLock;

use mailhub_core::config::ImapConfig;
use mailhub_core::traits::ImapSettings;

/// An [`ImapSettings`] source that can be swapped at runtime, e.g. when the
/// operator changes the hierarchy delimiter without restarting sessions.
///
/// Consumers read the delimiter per operation, so an update takes effect on
/// the next call.
#[derive(Debug)]
pub struct SharedImapSettings {
    inner: RwLock<ImapConfig>,
}

impl SharedImapSettings {
    /// Create a settings source from an initial configuration.
    pub fn new(config: ImapConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    /// Replace the current settings.
    pub fn update(&self, config: ImapConfig) {
        *self.inner.write().expect("imap settings lock poisoned") = config;
    }
}

impl ImapSettings for SharedImapSettings {
    fn hierarchy_delimiter(&self) -> String {
        self.inner
            .read()
            .expect("imap settings lock poisoned")
            .hierarchy_delimiter
            .clone()
    }

    fn auto_subscribe_created(&self) -> bool {
        self.inner
            .read()
            .expect("imap settings lock poisoned")
            .auto_subscribe_created
    }
}
