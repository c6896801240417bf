//! Tracing-backed diagnostic sink.

use tracing::{error, info, warn};

use mailhub_core::traits::diagnostics::{DiagnosticSink, Severity};

/// Forwards diagnostic reports to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, severity: Severity, code: u32, context: &str, message: &str) {
        match severity {
            Severity::Low => info!(code, context, message, "store consistency diagnostic"),
            Severity::Medium => warn!(code, context, message, "store consistency diagnostic"),
            Severity::High => error!(code, context, message, "store consistency diagnostic"),
        }
    }
}
