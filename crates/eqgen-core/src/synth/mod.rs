//! Method synthesizers.
//!
//! Each synthesizer is a pure function of the schema and config; the shared
//! decoration (annotations, parameter shape, self type) lives in
//! [`MethodContext`] so every generated member is dressed the same way.

pub mod can_equal;
pub mod equals;
pub mod hash;
pub mod to_string;

use crate::{
    config::{GenerationConfig, SIDE_EFFECT_FREE},
    spec::{Annotation, Expr, Literal, Param, Stmt, TypeName, TypeRef},
};
use eqgen_schema::node::ClassSchema;

const OVERRIDE: &str = "java.lang.Override";
const SUPPRESS_WARNINGS: &str = "java.lang.SuppressWarnings";

///
/// MethodContext
///

pub(crate) struct MethodContext<'a> {
    pub schema: &'a ClassSchema,
    pub config: &'a GenerationConfig,
}

impl<'a> MethodContext<'a> {
    pub const fn new(schema: &'a ClassSchema, config: &'a GenerationConfig) -> Self {
        Self { schema, config }
    }

    /// Method annotations in a fixed order: purity marker, `@Override`, then
    /// the markers every injected member carries.
    pub fn annotations(&self, overrides: bool, pure: bool) -> Vec<Annotation> {
        let mut out = Vec::new();

        if pure && self.config.side_effect_free {
            out.push(Annotation::marker(SIDE_EFFECT_FREE));
        }
        if overrides {
            out.push(Annotation::marker(OVERRIDE));
        }
        if self.config.suppress_warnings {
            out.push(
                Annotation::marker(SUPPRESS_WARNINGS)
                    .with_arg(Expr::Literal(Literal::Str("all".to_string()))),
            );
        }
        if let Some(generated) = &self.config.generated_annotation {
            out.push(Annotation::marker(generated.as_str()));
        }

        out
    }

    /// The lone `Object`-typed parameter of `equals`/`canEqual`.
    pub fn object_param(&self, name: &str) -> Param {
        Param {
            annotations: self
                .config
                .param_annotations
                .iter()
                .map(|a| Annotation::marker(a.as_str()))
                .collect(),
            is_final: self.config.final_params,
            ty: TypeRef::java_lang("Object"),
            name: name.to_string(),
        }
    }

    pub fn local(&self, ty: TypeRef, name: &str, init: Expr) -> Stmt {
        Stmt::Local {
            is_final: self.config.final_params,
            ty,
            name: name.to_string(),
            init,
        }
    }

    /// The declaring type, optionally with `?` for every type parameter in
    /// scope.
    pub fn self_type(&self, wildcards: bool) -> TypeRef {
        let ty = &self.schema.declaring_type;
        let counts = if wildcards {
            ty.wildcard_counts()
        } else {
            vec![0; ty.segments.len()]
        };

        TypeRef::Named(
            ty.segments
                .iter()
                .zip(counts)
                .map(|(segment, wildcards)| TypeName {
                    name: segment.name.clone(),
                    wildcards,
                })
                .collect(),
        )
    }
}
