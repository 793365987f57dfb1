use derive_more::Display;
use serde::Serialize;

///
/// Severity
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Severity {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

///
/// Diagnostic
///
/// A message the host attaches to the annotated declaration.
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[display("{severity}: {message}")]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
