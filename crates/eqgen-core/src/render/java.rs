//! Deterministic Java source rendering of method specifications.

use crate::{config::GenerationConfig, spec::*};
use std::fmt::{self, Write as _};

///
/// JavaRenderer
///

#[derive(Clone, Debug)]
pub struct JavaRenderer {
    indent: String,
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl JavaRenderer {
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            indent: config.indent.clone(),
        }
    }

    #[must_use]
    pub fn render_method(&self, spec: &MethodSpec) -> String {
        let mut out = String::new();

        for annotation in &spec.annotations {
            out.push_str(&annotation_src(annotation));
            out.push('\n');
        }

        let params = spec
            .params
            .iter()
            .map(param_src)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{} {} {}({params}) {{",
            spec.visibility,
            type_src(&spec.return_type),
            spec.name
        );

        for stmt in &spec.body {
            let _ = writeln!(out, "{}{}", self.indent, stmt_src(stmt));
        }
        out.push_str("}\n");

        out
    }

    /// Render several methods separated by a blank line, in the given order.
    #[must_use]
    pub fn render_all<'a>(&self, specs: impl IntoIterator<Item = &'a MethodSpec>) -> String {
        specs
            .into_iter()
            .map(|spec| self.render_method(spec))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&JavaRenderer::default().render_method(self))
    }
}

fn annotation_src(annotation: &Annotation) -> String {
    if annotation.args.is_empty() {
        format!("@{}", annotation.path)
    } else {
        let args = annotation.args.iter().map(expr_src).collect::<Vec<_>>();
        format!("@{}({})", annotation.path, args.join(", "))
    }
}

fn param_src(param: &Param) -> String {
    let mut out = String::new();
    for annotation in &param.annotations {
        out.push_str(&annotation_src(annotation));
        out.push(' ');
    }
    if param.is_final {
        out.push_str("final ");
    }
    let _ = write!(out, "{} {}", type_src(&param.ty), param.name);

    out
}

fn type_src(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Boolean | TypeRef::Int => ty.path(),
        TypeRef::Named(names) => names
            .iter()
            .map(|n| {
                if n.wildcards == 0 {
                    n.name.clone()
                } else {
                    format!("{}<{}>", n.name, vec!["?"; n.wildcards].join(", "))
                }
            })
            .collect::<Vec<_>>()
            .join("."),
    }
}

fn stmt_src(stmt: &Stmt) -> String {
    match stmt {
        Stmt::If { cond, then } => format!("if ({}) {}", expr_src(cond), stmt_src(then)),
        Stmt::Local {
            is_final,
            ty,
            name,
            init,
        } => {
            let modifier = if *is_final { "final " } else { "" };
            format!("{modifier}{} {name} = {};", type_src(ty), expr_src(init))
        }
        Stmt::Return(expr) => format!("return {};", expr_src(expr)),
    }
}

fn expr_src(expr: &Expr) -> String {
    match expr {
        Expr::This => "this".to_string(),
        Expr::Ident(name) => name.clone(),
        Expr::Literal(lit) => literal_src(lit),
        Expr::Field { target, name } => format!("{}.{name}", wrap(target, 16)),
        Expr::Call {
            target,
            method,
            args,
        } => format!("{}.{method}({})", wrap(target, 16), args_src(args)),
        Expr::StaticCall {
            owner,
            method,
            args,
        } => format!("{}.{method}({})", type_src(owner), args_src(args)),
        Expr::Binary { op, lhs, rhs } => {
            let prec = op.precedence();
            format!("{} {op} {}", wrap(lhs, prec), wrap(rhs, prec + 1))
        }
        Expr::Not(inner) => format!("!{}", wrap(inner, 14)),
        Expr::InstanceOf { expr, ty } => {
            format!("{} instanceof {}", wrap(expr, 10), type_src(ty))
        }
        Expr::Cast { ty, expr } => format!("({}) {}", type_src(ty), wrap(expr, 14)),
        Expr::Conditional {
            cond,
            then,
            otherwise,
        } => format!(
            "{} ? {} : {}",
            wrap(cond, 3),
            wrap(then, 3),
            wrap(otherwise, 2)
        ),
    }
}

// parenthesize when the child binds looser than its position requires
fn wrap(expr: &Expr, min: u8) -> String {
    let src = expr_src(expr);
    if expr.precedence() < min {
        format!("({src})")
    } else {
        src
    }
}

fn args_src(args: &[Expr]) -> String {
    args.iter().map(expr_src).collect::<Vec<_>>().join(", ")
}

fn literal_src(lit: &Literal) -> String {
    match lit {
        Literal::Bool(b) => b.to_string(),
        Literal::Int(n) => n.to_string(),
        Literal::Float(v) => format!("{v:?}F"),
        Literal::Double(v) => format!("{v:?}"),
        Literal::Str(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
            out
        }
        Literal::Null => "null".to_string(),
    }
}
