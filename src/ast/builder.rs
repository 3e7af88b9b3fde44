//! # AST Builder Module
//!
//! Free-function constructors for expression trees. Both front-ends build
//! their output through these, and tests use them to write trees inline.

use super::{BinaryOperator, Expr, LiteralValue, LogicalOperator, UnaryOperator};

pub fn ident(name: impl Into<String>) -> Expr {
    Expr::Identifier(name.into())
}

pub fn number(value: f64) -> Expr {
    Expr::Literal(LiteralValue::Number(value))
}

pub fn string(value: impl Into<String>) -> Expr {
    Expr::Literal(LiteralValue::String(value.into()))
}

pub fn boolean(value: bool) -> Expr {
    Expr::Literal(LiteralValue::Boolean(value))
}

pub fn null() -> Expr {
    Expr::Literal(LiteralValue::Null)
}

pub fn regex(pattern: impl Into<String>, flags: impl Into<String>) -> Expr {
    Expr::Literal(LiteralValue::Regex {
        pattern: pattern.into(),
        flags: flags.into(),
    })
}

pub fn absent() -> Expr {
    Expr::Literal(LiteralValue::Absent)
}

pub fn this() -> Expr {
    Expr::ThisRef
}

pub fn object() -> Expr {
    Expr::ObjectLiteral
}

pub fn array() -> Expr {
    Expr::ArrayLiteral
}

/// `object.property`, or `object[property]` when `property` is not an identifier.
pub fn member(object: Expr, property: Expr) -> Expr {
    Expr::MemberAccess {
        object: Box::new(object),
        property: Box::new(property),
    }
}

/// Builds `a.b.c` from `"a"` and `["b", "c"]`.
pub fn path(head: &str, tail: &[&str]) -> Expr {
    tail.iter()
        .fold(ident(head), |object, segment| member(object, ident(*segment)))
}

pub fn function(name: Option<&str>) -> Expr {
    Expr::FunctionExpr {
        name: name.map(str::to_string),
    }
}

pub fn function_decl(name: Option<&str>) -> Expr {
    Expr::FunctionDecl {
        name: name.map(str::to_string),
    }
}

pub fn call(callee: Expr) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
    }
}

pub fn new(callee: Expr) -> Expr {
    Expr::ConstructorCall {
        callee: Box::new(callee),
    }
}

pub fn unary(operator: UnaryOperator, argument: Expr) -> Expr {
    Expr::UnaryOp {
        operator,
        argument: Box::new(argument),
    }
}

pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn logical(operator: LogicalOperator, left: Expr, right: Expr) -> Expr {
    Expr::LogicalOp {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn assign(left: Expr, right: Expr) -> Expr {
    Expr::AssignmentOp {
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn update(prefix: bool, argument: Expr) -> Expr {
    Expr::UpdateOp {
        prefix,
        argument: Box::new(argument),
    }
}

pub fn conditional(consequent: Expr, alternate: Expr) -> Expr {
    Expr::ConditionalOp {
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    }
}
