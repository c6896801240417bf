//! # mailhub-hierarchy
//!
//! The mailbox folder-hierarchy directory of the MailHub mail store.
//!
//! Per account (or for the shared/public namespace) this crate maintains an
//! in-memory tree mirroring the flat `imap_folders` relation and answers the
//! lookups and mutations the protocol engine needs to resolve mailbox names
//! to folder identities: full reload, name/path/id lookup, idempotent path
//! materialization, and detachment.
//!
//! The tree is a recursive composite: a [`FolderDirectory`] holds the
//! ordered direct children of one parent, and every [`FolderNode`] owns
//! exactly one child directory. Each directory guards its own child list
//! with its own lock; there is no global tree lock.

pub mod diagnostics;
pub mod directory;
pub mod node;
pub mod path;
pub mod settings;

pub use diagnostics::TracingDiagnosticSink;
pub use directory::FolderDirectory;
pub use node::FolderNode;
pub use settings::SharedImapSettings;
