//! Member comparison lookup table.

use derive_more::Display;
use eqgen_schema::types::TypeCategory;
use serde::Serialize;

///
/// FloatWidth
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum FloatWidth {
    #[display("Float")]
    Single,
    #[display("Double")]
    Double,
}

///
/// ComparisonRule
///
/// How one identity member decides equality. Sentinel rules treat a zero
/// value on the receiving side as "unassigned" and therefore never equal.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ComparisonRule {
    /// Zero is unset; otherwise numeric `!=`.
    SentinelNumeric,

    /// Zero is unset; otherwise the boxed type's total-order `compare`.
    SentinelCanonical(FloatWidth),

    /// Raw `!=` with no sentinel.
    Raw,

    /// `java.util.Arrays.equals`.
    ArrayShallow,

    /// `java.util.Arrays.deepEquals`.
    ArrayDeep,

    /// Null on the receiving side is unequal; otherwise null-safe `equals`.
    NullSafeReference,
}

/// Resolve the comparison rule for a member category.
#[must_use]
pub const fn rule(category: TypeCategory) -> ComparisonRule {
    match category {
        TypeCategory::IntegerLike => ComparisonRule::SentinelNumeric,
        TypeCategory::Float32 => ComparisonRule::SentinelCanonical(FloatWidth::Single),
        TypeCategory::Float64 => ComparisonRule::SentinelCanonical(FloatWidth::Double),
        TypeCategory::Boolean | TypeCategory::PlainPrimitive => ComparisonRule::Raw,
        TypeCategory::Array(element) if element.needs_deep_equality() => {
            ComparisonRule::ArrayDeep
        }
        TypeCategory::Array(_) => ComparisonRule::ArrayShallow,
        TypeCategory::Reference => ComparisonRule::NullSafeReference,
    }
}
