use crate::prelude::*;
use derive_more::{Display, FromStr};
use std::fmt;

///
/// Presence
///
/// Whether a well-known member already exists on the declaration and who
/// wrote it. Ordered so that the strongest claim compares greatest.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq,
    PartialOrd, Serialize,
)]
pub enum Presence {
    #[default]
    Absent,
    UserWritten,
    ToolGenerated,
}

impl Presence {
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

///
/// DeclarationKind
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum DeclarationKind {
    Annotation,
    #[default]
    Class,
    Enum,
    Interface,
}

impl DeclarationKind {
    #[must_use]
    pub const fn is_class(self) -> bool {
        matches!(self, Self::Class)
    }
}

///
/// AccessKind
///
/// How generated code reads a member: `this.name` or `this.name()`.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
pub enum AccessKind {
    #[default]
    DirectField,
    AccessorMethod,
}

///
/// ArrayElement
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
pub enum ArrayElement {
    Primitive,
    PrimitiveMultiDimensional,
    Reference,
}

impl ArrayElement {
    // single-dimension primitive arrays are the only ones compared shallowly
    #[must_use]
    pub const fn needs_deep_equality(self) -> bool {
        !matches!(self, Self::Primitive)
    }
}

///
/// TypeCategory
///
/// Semantic category of an identity member, resolved once during extraction.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum TypeCategory {
    Array(ArrayElement),
    /// Primitive `boolean`; its getter takes the `is` prefix.
    Boolean,
    Float32,
    Float64,
    IntegerLike,
    PlainPrimitive,
    Reference,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(element) => write!(f, "Array({element})"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Float32 => f.write_str("Float32"),
            Self::Float64 => f.write_str("Float64"),
            Self::IntegerLike => f.write_str("IntegerLike"),
            Self::PlainPrimitive => f.write_str("PlainPrimitive"),
            Self::Reference => f.write_str("Reference"),
        }
    }
}
