//! Decides whether a declaration gets generated equality, and with which
//! dispatch shape.

use crate::error::GenerateError;
use eqgen_schema::{node::ClassSchema, types::Presence};
use serde::Serialize;

///
/// PolicyDecision
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PolicyDecision {
    Skip,
    SkipWithWarning(String),
    Generate { needs_guard: bool },
}

/// Resolve the policy for one declaration.
///
/// Anything already generated wins over anything user-written, so a second
/// pass over spliced output is always a silent skip.
pub fn resolve(schema: &ClassSchema) -> Result<PolicyDecision, GenerateError> {
    if !schema.kind.is_class() {
        return Err(GenerateError::NotAClass {
            kind: schema.kind,
            name: schema.declaring_type.path(),
        });
    }

    let equals = schema.existing.equals;
    let hash_code = schema.existing.hash_code;

    let decision = match equals.max(hash_code) {
        Presence::ToolGenerated => PolicyDecision::Skip,
        Presence::UserWritten if equals.is_absent() || hash_code.is_absent() => {
            let missing = if equals.is_absent() { "equals" } else { "hashCode" };
            PolicyDecision::SkipWithWarning(asymmetric_message(missing))
        }
        Presence::UserWritten => PolicyDecision::Skip,
        Presence::Absent => PolicyDecision::Generate {
            needs_guard: schema.needs_guard(),
        },
    };

    Ok(decision)
}

fn asymmetric_message(missing: &str) -> String {
    format!(
        "not generating {missing}: one of equals/hashCode is user-defined without the other; \
         both must be written together or neither"
    )
}
