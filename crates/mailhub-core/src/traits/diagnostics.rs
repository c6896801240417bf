//! Diagnostic reporting seam for non-fatal consistency anomalies.
//!
//! Store-consistency problems (e.g. a folder row whose parent id does not
//! resolve) are not protocol errors: the affected component keeps going and
//! reports the anomaly here for operator visibility. Sinks are injected as
//! explicit collaborators so tests can assert on reported events.

/// Severity of a reported diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Informational, no operator action expected.
    Low,
    /// Degraded behavior, worth investigating.
    Medium,
    /// Data loss or persistent malfunction likely.
    High,
}

/// Well-known diagnostic event codes.
pub mod codes {
    /// A folder row referenced a parent id that does not exist; the row was
    /// dropped from the in-memory tree for the current refresh cycle.
    pub const ORPHANED_FOLDER_ROW: u32 = 5125;
}

/// Receives non-fatal consistency warnings.
///
/// Reports are fire-and-forget: a sink that fails to deliver must never
/// affect the correctness of the reporting component.
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic event.
    ///
    /// `context` identifies the reporting operation
    /// (e.g. `"FolderDirectory::refresh"`).
    fn report(&self, severity: Severity, code: u32, context: &str, message: &str);
}
