use crate::{spec::*, synth::MethodContext};

/// Build `protected boolean canEqual(Object other)`.
pub(crate) fn synthesize(ctx: &MethodContext<'_>) -> MethodSpec {
    let other = "other";

    MethodSpec {
        name: "canEqual".to_string(),
        annotations: ctx.annotations(false, true),
        visibility: Visibility::Protected,
        return_type: TypeRef::Boolean,
        params: vec![ctx.object_param(other)],
        body: vec![Stmt::Return(instance_of(ident(other), ctx.self_type(false)))],
    }
}
