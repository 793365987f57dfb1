pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Name of the surrogate identity member synthesized for classes that
/// declare no identity member of their own.
pub const SURROGATE_ID_NAME: &str = "id";

/// Maximum length for member and type segment identifiers.
pub const MAX_IDENT_LEN: usize = 255;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{AccessKind, ArrayElement, DeclarationKind, Presence, TypeCategory},
    };
    pub use serde::{Deserialize, Serialize};
}
