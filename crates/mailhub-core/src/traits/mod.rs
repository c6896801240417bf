//! Collaborator traits implemented by other crates.

pub mod diagnostics;
pub mod settings;

pub use diagnostics::{DiagnosticSink, Severity};
pub use settings::ImapSettings;
