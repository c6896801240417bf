//! Live IMAP settings seam.

use crate::config::ImapConfig;

/// Provides the current IMAP protocol settings.
///
/// The hierarchy delimiter may be reconfigured at runtime, so consumers
/// must ask for it per operation rather than caching it.
pub trait ImapSettings: Send + Sync {
    /// The current hierarchy delimiter used to split and join mailbox paths.
    fn hierarchy_delimiter(&self) -> String;

    /// Whether folders created on behalf of a client start out subscribed.
    fn auto_subscribe_created(&self) -> bool;
}

/// A fixed snapshot of [`ImapConfig`] works as a settings source when no
/// runtime reconfiguration is needed (tests, one-shot tools).
impl ImapSettings for ImapConfig {
    fn hierarchy_delimiter(&self) -> String {
        self.hierarchy_delimiter.clone()
    }

    fn auto_subscribe_created(&self) -> bool {
        self.auto_subscribe_created
    }
}
