//! Abstract method specifications handed to the code host.
//!
//! The host splices these into the target declaration; nothing in this crate
//! mutates a syntax tree.

mod expr;
mod maker;

pub use expr::*;
pub use maker::*;

use derive_more::Display;
use serde::Serialize;

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Visibility {
    #[display("public")]
    Public,
    #[display("protected")]
    Protected,
}

///
/// Annotation
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub path: String,
    pub args: Vec<Expr>,
}

impl Annotation {
    #[must_use]
    pub fn marker(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: Expr) -> Self {
        self.args.push(arg);
        self
    }
}

///
/// Param
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Param {
    pub annotations: Vec<Annotation>,
    pub is_final: bool,
    pub ty: TypeRef,
    pub name: String,
}

///
/// MethodSpec
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodSpec {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

///
/// Stmt
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Stmt {
    If { cond: Expr, then: Box<Self> },
    Local {
        is_final: bool,
        ty: TypeRef,
        name: String,
        init: Expr,
    },
    Return(Expr),
}

///
/// TypeRef
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeRef {
    Boolean,
    Int,
    Named(Vec<TypeName>),
}

impl TypeRef {
    /// A dotted, fully qualified name without type arguments.
    #[must_use]
    pub fn qualified(path: &str) -> Self {
        Self::Named(path.split('.').map(TypeName::plain).collect())
    }

    #[must_use]
    pub fn java_lang(name: &str) -> Self {
        Self::qualified(&format!("java.lang.{name}"))
    }

    /// Dotted path ignoring wildcards; primitives render as their keyword.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Boolean => "boolean".to_string(),
            Self::Int => "int".to_string(),
            Self::Named(names) => names
                .iter()
                .map(|n| n.name.as_str())
                .collect::<Vec<_>>()
                .join("."),
        }
    }
}

///
/// TypeName
///
/// One dotted segment with its count of unbounded `?` arguments.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct TypeName {
    pub name: String,
    pub wildcards: usize,
}

impl TypeName {
    #[must_use]
    pub fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            wildcards: 0,
        }
    }
}
