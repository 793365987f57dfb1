use crate::{config::GenerationConfig, spec::*, synth::MethodContext};
use eqgen_schema::node::ClassSchema;

/// Build `toString()` for an identity-bearing class.
///
/// Prefers a `getName()` accessor, then the identity members' getters joined
/// by spaces, then the simple class name. Returns `None` when the class
/// already has one, written by hand or by an earlier pass.
#[must_use]
pub fn synthesize_to_string(schema: &ClassSchema, config: &GenerationConfig) -> Option<MethodSpec> {
    if !schema.existing.to_string.is_absent() {
        return None;
    }

    let ctx = MethodContext::new(schema, config);
    let value = if schema.has_name_accessor {
        call(Expr::This, "getName", Vec::new())
    } else if !schema.identity_members.is_empty() {
        joined_getters(schema)
    } else {
        simple_name(config)
    };

    Some(MethodSpec {
        name: "toString".to_string(),
        annotations: ctx.annotations(false, false),
        visibility: Visibility::Public,
        return_type: TypeRef::java_lang("String"),
        params: Vec::new(),
        body: vec![Stmt::Return(value)],
    })
}

// "" + this.getId() + " " + this.getCode()
fn joined_getters(schema: &ClassSchema) -> Expr {
    let mut expr = str_lit("");

    for (i, member) in schema.identity_members.iter().enumerate() {
        if i > 0 {
            expr = binary(BinaryOp::Concat, expr, str_lit(" "));
        }
        let getter = call(Expr::This, &member.getter_name(), Vec::new());
        expr = binary(BinaryOp::Concat, expr, getter);
    }

    expr
}

fn simple_name(config: &GenerationConfig) -> Expr {
    let name = call(
        call(Expr::This, "getClass", Vec::new()),
        "getSimpleName",
        Vec::new(),
    );

    match config
        .to_string_fallback
        .as_deref()
        .and_then(|helper| helper.rsplit_once('.'))
    {
        Some((owner, method)) => static_call(TypeRef::qualified(owner), method, vec![name]),
        None => name,
    }
}
