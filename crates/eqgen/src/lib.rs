//! ## Crate layout
//! - `schema`: class schema model, validation, and the reference builder.
//! - `core`: policy, synthesizers, method specifications, and rendering.
//! - `error`: the host-facing error taxonomy.
//!
//! Hosts normally construct a [`Generator`] once per compilation pass and
//! hand it every annotated declaration together with a [`DiagnosticSink`].

pub use eqgen_core as core;
pub use eqgen_schema as schema;

pub mod error;
pub mod generator;
pub mod sink;

pub use error::Error;
pub use generator::{Generator, Output};
pub use sink::{CollectingSink, DiagnosticSink, Report, TracingSink};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::prelude::*,
        error::{Error, ErrorKind, ErrorOrigin},
        generator::{Generator, Output},
        schema::prelude::*,
        sink::{CollectingSink, DiagnosticSink},
    };
}
