use crate::{
    spec::*,
    strategy::{self, ComparisonRule, FloatWidth},
    synth::MethodContext,
};
use eqgen_schema::{node::MemberDescriptor, types::AccessKind};
use std::collections::HashSet;

const PARAM: &str = "o";
const OTHER: &str = "other";

/// Build `equals(Object o)`.
///
/// Statement order: reference short-circuit, type test, cast, guard (when
/// needed), one rule per identity member in declaration order, `true`.
pub(crate) fn synthesize(ctx: &MethodContext<'_>, needs_guard: bool) -> MethodSpec {
    let mut body = Vec::new();

    // if (o == this) return true;
    body.push(Stmt::If {
        cond: eq(ident(PARAM), Expr::This),
        then: Box::new(return_bool(true)),
    });

    // if (!(o instanceof Outer.Inner)) return false;
    body.push(reject_if(not(instance_of(ident(PARAM), ctx.self_type(false)))));

    // final Outer.Inner<?> other = (Outer.Inner<?>) o;
    body.push(ctx.local(
        ctx.self_type(true),
        OTHER,
        cast(ctx.self_type(true), ident(PARAM)),
    ));

    // if (!other.canEqual((java.lang.Object) this)) return false;
    if needs_guard {
        body.push(reject_if(not(call(
            ident(OTHER),
            "canEqual",
            vec![cast(TypeRef::java_lang("Object"), Expr::This)],
        ))));
    }

    let mut locals = HashSet::new();
    for member in &ctx.schema.identity_members {
        member_statements(ctx, member, &mut locals, &mut body);
    }

    body.push(return_bool(true));

    MethodSpec {
        name: "equals".to_string(),
        annotations: ctx.annotations(true, true),
        visibility: Visibility::Public,
        return_type: TypeRef::Boolean,
        params: vec![ctx.object_param(PARAM)],
        body,
    }
}

// Read a member off `target` the way it was declared.
fn access(member: &MemberDescriptor, target: Expr) -> Expr {
    match member.access {
        AccessKind::DirectField => field(target, &member.name),
        AccessKind::AccessorMethod => call(target, &member.name, Vec::new()),
    }
}

// Suffix shared by the `this`/`other` locals of one reference member.
// Accessor-backed members get a doubled `$`; a suffix already claimed by an
// earlier member (field `$code` next to accessor `code`) gets a counter.
fn local_suffix(member: &MemberDescriptor, taken: &mut HashSet<String>) -> String {
    let sep = if member.access == AccessKind::AccessorMethod { "$$" } else { "$" };
    let base = format!("{sep}{}", member.name);

    let mut suffix = base.clone();
    let mut n = 1;
    while !taken.insert(suffix.clone()) {
        suffix = format!("{base}${n}");
        n += 1;
    }

    suffix
}

fn member_statements(
    ctx: &MethodContext<'_>,
    member: &MemberDescriptor,
    locals: &mut HashSet<String>,
    body: &mut Vec<Stmt>,
) {
    let this_side = || access(member, Expr::This);
    let other_side = || access(member, ident(OTHER));

    match strategy::rule(member.category) {
        ComparisonRule::SentinelNumeric => {
            body.push(reject_if(eq(this_side(), Expr::Literal(Literal::Int(0)))));
            body.push(reject_if(ne(this_side(), other_side())));
        }

        ComparisonRule::SentinelCanonical(width) => {
            let zero = match width {
                FloatWidth::Single => Literal::Float(0.0),
                FloatWidth::Double => Literal::Double(0.0),
            };
            body.push(reject_if(eq(this_side(), Expr::Literal(zero))));

            let compare = static_call(
                TypeRef::java_lang(&width.to_string()),
                "compare",
                vec![this_side(), other_side()],
            );
            body.push(reject_if(ne(compare, Expr::Literal(Literal::Int(0)))));
        }

        ComparisonRule::Raw => {
            body.push(reject_if(ne(this_side(), other_side())));
        }

        rule @ (ComparisonRule::ArrayShallow | ComparisonRule::ArrayDeep) => {
            let method = if rule == ComparisonRule::ArrayDeep {
                "deepEquals"
            } else {
                "equals"
            };
            body.push(reject_if(not(static_call(
                TypeRef::qualified("java.util.Arrays"),
                method,
                vec![this_side(), other_side()],
            ))));
        }

        ComparisonRule::NullSafeReference => {
            body.push(reject_if(eq(this_side(), null())));

            let suffix = local_suffix(member, locals);
            let this_local = format!("this{suffix}");
            let other_local = format!("other{suffix}");

            body.push(ctx.local(TypeRef::java_lang("Object"), &this_local, this_side()));
            body.push(ctx.local(TypeRef::java_lang("Object"), &other_local, other_side()));

            let differs = conditional(
                eq(ident(&this_local), null()),
                ne(ident(&other_local), null()),
                not(call(ident(&this_local), "equals", vec![ident(&other_local)])),
            );
            body.push(reject_if(differs));
        }
    }
}
