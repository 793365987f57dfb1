//! Reference extractor-side builder.
//!
//! Hosts collect what they see on a declaration through `ClassSchemaBuilder`;
//! `build` applies the surrogate-identity rule and validates the result.

use crate::{prelude::*, validate::SchemaError};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("declaring type is missing")]
    MissingType,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

///
/// ClassSchemaBuilder
///

#[derive(Clone, Debug, Default)]
pub struct ClassSchemaBuilder {
    kind: DeclarationKind,
    segments: Vec<TypeSegment>,
    members: MemberList,
    is_final: bool,
    is_direct_descendant_of_root: bool,
    existing: ExistingMembers,
    has_name_accessor: bool,
}

impl ClassSchemaBuilder {
    /// Start a builder for a top-level, non-generic class.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![TypeSegment::new(name)],
            is_direct_descendant_of_root: true,
            ..Self::default()
        }
    }

    /// Start a builder from an explicit outermost-first type path.
    #[must_use]
    pub fn nested(segments: Vec<TypeSegment>) -> Self {
        Self {
            segments,
            is_direct_descendant_of_root: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn is_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Record that the class extends something other than the root object.
    #[must_use]
    pub const fn extends_non_root(mut self) -> Self {
        self.is_direct_descendant_of_root = false;
        self
    }

    /// Append an identity member; declaration order is preserved.
    #[must_use]
    pub fn member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub const fn existing_equals(mut self, presence: Presence) -> Self {
        self.existing.equals = presence;
        self
    }

    #[must_use]
    pub const fn existing_hash_code(mut self, presence: Presence) -> Self {
        self.existing.hash_code = presence;
        self
    }

    #[must_use]
    pub const fn existing_can_equal(mut self, presence: Presence) -> Self {
        self.existing.can_equal = presence;
        self
    }

    #[must_use]
    pub const fn existing_to_string(mut self, presence: Presence) -> Self {
        self.existing.to_string = presence;
        self
    }

    #[must_use]
    pub const fn has_name_accessor(mut self, has: bool) -> Self {
        self.has_name_accessor = has;
        self
    }

    /// Finish the schema.
    ///
    /// A class with no marked identity member gets exactly one surrogate
    /// `id` member (integer-like, unset at zero).
    pub fn build(self) -> Result<ClassSchema, BuildError> {
        if self.segments.is_empty() {
            return Err(BuildError::MissingType);
        }

        let mut members = self.members;
        if members.is_empty() {
            members.push(MemberDescriptor::surrogate_id());
        }

        let schema = ClassSchema {
            kind: self.kind,
            declaring_type: DeclaringType::new(self.segments),
            identity_members: members,
            is_final: self.is_final,
            is_direct_descendant_of_root: self.is_direct_descendant_of_root,
            existing: self.existing,
            has_name_accessor: self.has_name_accessor,
        };
        schema.validate()?;

        Ok(schema)
    }
}
