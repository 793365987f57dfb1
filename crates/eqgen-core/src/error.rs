use eqgen_schema::{types::DeclarationKind, validate::SchemaError};
use thiserror::Error as ThisError;

///
/// GenerateError
///
/// Fatal for the one declaration being processed; never partial output.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("equality generation is only supported on a class, found {kind} '{name}'")]
    NotAClass { kind: DeclarationKind, name: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
