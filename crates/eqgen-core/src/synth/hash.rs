use crate::{spec::*, synth::MethodContext};

/// Build `hashCode()`, which hashes the runtime class and nothing else.
///
/// Identity members are usually assigned late (on persist); hashing them
/// would move an instance between buckets of any hash container it already
/// sits in. Every instance of a class shares one hash as a result.
pub(crate) fn synthesize(ctx: &MethodContext<'_>) -> MethodSpec {
    // return this.getClass().hashCode();
    let class_hash = call(call(Expr::This, "getClass", Vec::new()), "hashCode", Vec::new());

    MethodSpec {
        name: "hashCode".to_string(),
        annotations: ctx.annotations(true, true),
        visibility: Visibility::Public,
        return_type: TypeRef::Int,
        params: Vec::new(),
        body: vec![Stmt::Return(class_hash)],
    }
}
