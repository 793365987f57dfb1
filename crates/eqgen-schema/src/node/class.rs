use crate::{prelude::*, validate::SchemaError};

///
/// TypeSegment
///
/// One level of a (possibly nested) type path.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TypeSegment {
    pub name: String,

    #[serde(default)]
    pub type_params: usize,

    #[serde(default)]
    pub is_static: bool,
}

impl TypeSegment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: 0,
            is_static: false,
        }
    }

    #[must_use]
    pub const fn with_type_params(mut self, count: usize) -> Self {
        self.type_params = count;
        self
    }

    #[must_use]
    pub const fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

///
/// DeclaringType
///
/// Type path from the outermost enclosing type down to the annotated class.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeclaringType {
    pub segments: Vec<TypeSegment>,
}

impl DeclaringType {
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            segments: vec![TypeSegment::new(name)],
        }
    }

    #[must_use]
    pub const fn new(segments: Vec<TypeSegment>) -> Self {
        Self { segments }
    }

    /// Dotted source path, e.g. `Outer.Inner`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Number of `?` wildcards each segment needs, outermost first.
    ///
    /// The annotated class always contributes its own parameters. Enclosing
    /// types contribute theirs only until a `static` level is crossed, since
    /// a static nested type does not capture its outer type's parameters.
    #[must_use]
    pub fn wildcard_counts(&self) -> Vec<usize> {
        let mut counts = Vec::with_capacity(self.segments.len());
        let mut iter = self.segments.iter().rev();

        let Some(innermost) = iter.next() else {
            return counts;
        };
        counts.push(innermost.type_params);
        let mut static_context = innermost.is_static;

        for segment in iter {
            counts.push(if static_context { 0 } else { segment.type_params });
            static_context |= segment.is_static;
        }

        counts.reverse();
        counts
    }
}

///
/// ExistingMembers
///
/// What the declaration already defines, as observed by the extractor.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExistingMembers {
    #[serde(default)]
    pub equals: Presence,

    #[serde(default)]
    pub hash_code: Presence,

    #[serde(default)]
    pub can_equal: Presence,

    #[serde(default)]
    pub to_string: Presence,
}

///
/// ClassSchema
///
/// Everything the synthesizers need to know about one annotated declaration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClassSchema {
    #[serde(default)]
    pub kind: DeclarationKind,

    pub declaring_type: DeclaringType,

    pub identity_members: MemberList,

    #[serde(default)]
    pub is_final: bool,

    #[serde(default = "default_direct_descendant")]
    pub is_direct_descendant_of_root: bool,

    #[serde(default)]
    pub existing: ExistingMembers,

    /// Whether the class exposes a `getName()` accessor.
    #[serde(default)]
    pub has_name_accessor: bool,
}

const fn default_direct_descendant() -> bool {
    true
}

impl ClassSchema {
    /// A guard is unnecessary only for a final class directly below the root.
    #[must_use]
    pub const fn needs_guard(&self) -> bool {
        !self.is_final || !self.is_direct_descendant_of_root
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        crate::validate::validate_class(self).map_err(SchemaError::Invalid)
    }
}
