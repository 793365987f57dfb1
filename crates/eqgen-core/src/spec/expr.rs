use crate::spec::TypeRef;
use derive_more::Display;
use serde::Serialize;

///
/// Expr
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expr {
    This,
    Ident(String),
    Literal(Literal),
    Field {
        target: Box<Self>,
        name: String,
    },
    Call {
        target: Box<Self>,
        method: String,
        args: Vec<Self>,
    },
    StaticCall {
        owner: TypeRef,
        method: String,
        args: Vec<Self>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Self>,
        rhs: Box<Self>,
    },
    Not(Box<Self>),
    InstanceOf {
        expr: Box<Self>,
        ty: TypeRef,
    },
    Cast {
        ty: TypeRef,
        expr: Box<Self>,
    },
    Conditional {
        cond: Box<Self>,
        then: Box<Self>,
        otherwise: Box<Self>,
    },
}

impl Expr {
    /// Java operator precedence, higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::This
            | Self::Ident(_)
            | Self::Literal(_)
            | Self::Field { .. }
            | Self::Call { .. }
            | Self::StaticCall { .. } => 16,
            Self::Not(_) | Self::Cast { .. } => 14,
            Self::Binary { op, .. } => op.precedence(),
            Self::InstanceOf { .. } => 9,
            Self::Conditional { .. } => 2,
        }
    }
}

///
/// BinaryOp
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum BinaryOp {
    #[display("==")]
    Eq,
    #[display("!=")]
    Ne,
    #[display("+")]
    Concat,
}

impl BinaryOp {
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Concat => 11,
            Self::Eq | Self::Ne => 8,
        }
    }
}

///
/// Literal
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Null,
}
