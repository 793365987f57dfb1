//! Schema validation orchestration.

pub mod naming;
pub mod reserved;

use crate::prelude::*;
use std::collections::HashSet;
use thiserror::Error as ThisError;

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("schema validation failed: {0}")]
    Invalid(ErrorTree),
}

/// Validate a class schema in a fixed order: type path, then members.
pub(crate) fn validate_class(schema: &ClassSchema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    validate_type_path(&schema.declaring_type, &mut errs);
    validate_members(&schema.identity_members, &mut errs);

    errs.result()
}

fn validate_type_path(ty: &DeclaringType, errs: &mut ErrorTree) {
    if ty.segments.is_empty() {
        err!(errs, "declaring type path is empty");
        return;
    }

    for (i, segment) in ty.segments.iter().enumerate() {
        if let Err(msg) = naming::validate_ident(&segment.name) {
            let mut child = ErrorTree::new();
            child.add(msg);
            errs.add_child(format!("type[{i}]"), child);
        }
    }
}

fn validate_members(members: &MemberList, errs: &mut ErrorTree) {
    // the extractor owns the surrogate id; an empty list here is its bug
    if members.is_empty() {
        err!(
            errs,
            "no identity members; expected at least the surrogate '{}'",
            crate::SURROGATE_ID_NAME
        );
        return;
    }

    let mut seen = HashSet::new();
    for (i, member) in members.iter().enumerate() {
        let mut child = ErrorTree::new();

        if let Err(msg) = naming::validate_ident(&member.name) {
            child.add(msg);
        }
        if !seen.insert(member.name.as_str()) {
            err!(child, "duplicate identity member '{}'", member.name);
        }

        errs.add_child(format!("member[{i}]"), child);
    }
}
