use crate::{
    config::GenerationConfig,
    diagnostic::Diagnostic,
    error::GenerateError,
    policy::{self, PolicyDecision},
    spec::MethodSpec,
    synth::{self, MethodContext},
};
use eqgen_schema::node::ClassSchema;
use serde::Serialize;
use tracing::debug;

///
/// GeneratedMethods
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedMethods {
    pub equals: MethodSpec,
    pub hash_code: MethodSpec,
    pub can_equal: Option<MethodSpec>,
}

impl GeneratedMethods {
    /// Methods in splice order: `equals`, `canEqual`, `hashCode`.
    pub fn iter(&self) -> impl Iterator<Item = &MethodSpec> {
        std::iter::once(&self.equals)
            .chain(self.can_equal.as_ref())
            .chain(std::iter::once(&self.hash_code))
    }
}

///
/// GenerationResult
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GenerationResult {
    Skipped,
    SkippedWithWarning(String),
    Generated(GeneratedMethods),
}

impl GenerationResult {
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::SkippedWithWarning(message) => vec![Diagnostic::warning(message.as_str())],
            Self::Skipped | Self::Generated(_) => Vec::new(),
        }
    }

    /// Generated methods in splice order; empty for either skip.
    #[must_use]
    pub fn methods(&self) -> Vec<&MethodSpec> {
        match self {
            Self::Generated(methods) => methods.iter().collect(),
            Self::Skipped | Self::SkippedWithWarning(_) => Vec::new(),
        }
    }
}

/// Produce the equality methods for one class declaration.
///
/// Pure: the same schema and config always yield an identical result. A
/// malformed schema is an error even when the policy would skip it.
pub fn generate(
    schema: &ClassSchema,
    config: &GenerationConfig,
) -> Result<GenerationResult, GenerateError> {
    let name = schema.declaring_type.path();
    let decision = policy::resolve(schema)?;
    debug!(class = %name, ?decision, "resolved equality policy");

    schema.validate()?;

    let needs_guard = match decision {
        PolicyDecision::Skip => return Ok(GenerationResult::Skipped),
        PolicyDecision::SkipWithWarning(message) => {
            return Ok(GenerationResult::SkippedWithWarning(message));
        }
        PolicyDecision::Generate { needs_guard } => needs_guard,
    };

    let ctx = MethodContext::new(schema, config);
    let can_equal = (needs_guard && schema.existing.can_equal.is_absent())
        .then(|| synth::can_equal::synthesize(&ctx));
    let methods = GeneratedMethods {
        equals: synth::equals::synthesize(&ctx, needs_guard),
        hash_code: synth::hash::synthesize(&ctx),
        can_equal,
    };

    debug!(
        class = %name,
        members = schema.identity_members.len(),
        can_equal = methods.can_equal.is_some(),
        "generated equality methods"
    );

    Ok(GenerationResult::Generated(methods))
}
