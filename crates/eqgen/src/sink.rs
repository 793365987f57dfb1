//! Diagnostic sink boundary.
//!
//! Generation never prints. Every warning or per-declaration failure flows
//! through a `DiagnosticSink` the host supplies, typically one that forwards
//! into its own compiler messages against the named declaration.

use eqgen_core::diagnostic::{Diagnostic, Severity};

/// Declaration name used when a schema could not even be decoded.
pub const UNKNOWN_DECLARATION: &str = "<unknown>";

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn report(&mut self, declaration: &str, diagnostic: &Diagnostic);
}

///
/// Report
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub declaration: String,
    pub diagnostic: Diagnostic,
}

///
/// CollectingSink
/// Keeps every report in arrival order.
///

#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    reports: Vec<Report>,
}

impl CollectingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.reports
            .iter()
            .filter(|r| r.diagnostic.severity == severity)
            .count()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Report> {
        self.reports
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, declaration: &str, diagnostic: &Diagnostic) {
        self.reports.push(Report {
            declaration: declaration.to_string(),
            diagnostic: diagnostic.clone(),
        });
    }
}

///
/// TracingSink
/// Forwards diagnostics to the active `tracing` subscriber.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, declaration: &str, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(declaration, message = %diagnostic.message);
            }
            Severity::Error => {
                tracing::error!(declaration, message = %diagnostic.message);
            }
        }
    }
}
