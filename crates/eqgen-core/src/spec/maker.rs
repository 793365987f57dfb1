//! Small constructors so synthesizers read like the code they emit.

use crate::spec::{BinaryOp, Expr, Literal, Stmt, TypeRef};

#[must_use]
pub fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

#[must_use]
pub fn field(target: Expr, name: &str) -> Expr {
    Expr::Field {
        target: Box::new(target),
        name: name.to_string(),
    }
}

#[must_use]
pub fn call(target: Expr, method: &str, args: Vec<Expr>) -> Expr {
    Expr::Call {
        target: Box::new(target),
        method: method.to_string(),
        args,
    }
}

#[must_use]
pub fn static_call(owner: TypeRef, method: &str, args: Vec<Expr>) -> Expr {
    Expr::StaticCall {
        owner,
        method: method.to_string(),
        args,
    }
}

#[must_use]
pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

#[must_use]
pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
    binary(BinaryOp::Eq, lhs, rhs)
}

#[must_use]
pub fn ne(lhs: Expr, rhs: Expr) -> Expr {
    binary(BinaryOp::Ne, lhs, rhs)
}

#[must_use]
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

#[must_use]
pub fn instance_of(expr: Expr, ty: TypeRef) -> Expr {
    Expr::InstanceOf {
        expr: Box::new(expr),
        ty,
    }
}

#[must_use]
pub fn cast(ty: TypeRef, expr: Expr) -> Expr {
    Expr::Cast {
        ty,
        expr: Box::new(expr),
    }
}

#[must_use]
pub fn conditional(cond: Expr, then: Expr, otherwise: Expr) -> Expr {
    Expr::Conditional {
        cond: Box::new(cond),
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    }
}

#[must_use]
pub const fn null() -> Expr {
    Expr::Literal(Literal::Null)
}

#[must_use]
pub fn str_lit(s: &str) -> Expr {
    Expr::Literal(Literal::Str(s.to_string()))
}

#[must_use]
pub const fn return_bool(value: bool) -> Stmt {
    Stmt::Return(Expr::Literal(Literal::Bool(value)))
}

/// `if (cond) return false;`
#[must_use]
pub fn reject_if(cond: Expr) -> Stmt {
    Stmt::If {
        cond,
        then: Box::new(return_bool(false)),
    }
}
