use derive_more::Display;
use eqgen_core::{config::ConfigError, error::GenerateError};
use eqgen_schema::{build::BuildError, validate::SchemaError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<GenerateError> for Error {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::NotAClass { .. } => {
                Self::new(ErrorKind::Validation, ErrorOrigin::Policy, err.to_string())
            }
            GenerateError::Schema(err) => err.into(),
        }
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Self::new(ErrorKind::Schema, ErrorOrigin::Schema, err.to_string())
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::MissingType => {
                Self::new(ErrorKind::Schema, ErrorOrigin::Schema, err.to_string())
            }
            BuildError::Schema(err) => err.into(),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ErrorKind::Internal
        } else {
            ErrorKind::Schema
        };

        Self::new(kind, ErrorOrigin::Schema, format!("failed to decode schema: {err}"))
    }
}

///
/// ErrorKind
/// Public error taxonomy for hosts.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// The marker was applied to something that cannot carry it.
    Validation,

    /// The extracted schema is malformed.
    Schema,

    /// Generation settings could not be loaded.
    Config,

    /// The caller cannot remediate this.
    Internal,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Policy,
    Schema,
}
