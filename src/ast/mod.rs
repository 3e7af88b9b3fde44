//! AST module for Nomen
//!
//! The expression tree the naming engine consumes. Each variant carries only
//! the fields its naming rule reads; everything else a front-end parses is
//! dropped on construction. Trees are immutable once built and are borrowed,
//! never retained, by the engine.

pub mod builder;

use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// An expression node.
///
/// # Examples
///
/// ```rust
/// use nomen::ast::builder::{ident, member};
/// let expr = member(ident("view"), ident("width"));
/// assert_eq!(expr.kind(), "MemberAccess");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    Literal(LiteralValue),
    /// `object.property` and `object[property]`
    MemberAccess {
        object: Box<Expr>,
        property: Box<Expr>,
    },
    FunctionExpr {
        name: Option<String>,
    },
    FunctionDecl {
        name: Option<String>,
    },
    Call {
        callee: Box<Expr>,
    },
    ThisRef,
    ObjectLiteral,
    ArrayLiteral,
    UnaryOp {
        operator: UnaryOperator,
        argument: Box<Expr>,
    },
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    AssignmentOp {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `++x` / `--x` when `prefix` is set, `x++` / `x--` otherwise
    UpdateOp {
        prefix: bool,
        argument: Box<Expr>,
    },
    LogicalOp {
        operator: LogicalOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `test ? consequent : alternate`
    ConditionalOp {
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// `new callee(...)`
    ConstructorCall {
        callee: Box<Expr>,
    },
}

/// The value carried by a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Regex { pattern: String, flags: String },
    /// A literal whose value the producer could not represent.
    Absent,
}

// ============================================================================
// OPERATORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    Negative,
    Positive,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponent,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    In,
    InstanceOf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Coalesce,
}

const UNARY_SYMBOLS: &[(UnaryOperator, &str)] = &[
    (UnaryOperator::Not, "!"),
    (UnaryOperator::Negative, "-"),
    (UnaryOperator::Positive, "+"),
    (UnaryOperator::BitwiseNot, "~"),
    (UnaryOperator::TypeOf, "typeof"),
    (UnaryOperator::Void, "void"),
    (UnaryOperator::Delete, "delete"),
];

const BINARY_SYMBOLS: &[(BinaryOperator, &str)] = &[
    (BinaryOperator::Add, "+"),
    (BinaryOperator::Subtract, "-"),
    (BinaryOperator::Multiply, "*"),
    (BinaryOperator::Divide, "/"),
    (BinaryOperator::Remainder, "%"),
    (BinaryOperator::Exponent, "**"),
    (BinaryOperator::Equal, "=="),
    (BinaryOperator::NotEqual, "!="),
    (BinaryOperator::StrictEqual, "==="),
    (BinaryOperator::StrictNotEqual, "!=="),
    (BinaryOperator::Less, "<"),
    (BinaryOperator::LessEqual, "<="),
    (BinaryOperator::Greater, ">"),
    (BinaryOperator::GreaterEqual, ">="),
    (BinaryOperator::ShiftLeft, "<<"),
    (BinaryOperator::ShiftRight, ">>"),
    (BinaryOperator::UnsignedShiftRight, ">>>"),
    (BinaryOperator::BitwiseAnd, "&"),
    (BinaryOperator::BitwiseOr, "|"),
    (BinaryOperator::BitwiseXor, "^"),
    (BinaryOperator::In, "in"),
    (BinaryOperator::InstanceOf, "instanceof"),
];

const LOGICAL_SYMBOLS: &[(LogicalOperator, &str)] = &[
    (LogicalOperator::And, "&&"),
    (LogicalOperator::Or, "||"),
    (LogicalOperator::Coalesce, "??"),
];

fn lookup_symbol<T: Copy + PartialEq>(table: &[(T, &'static str)], op: T) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == op)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("?")
}

fn lookup_operator<T: Copy>(table: &[(T, &'static str)], symbol: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, candidate)| *candidate == symbol)
        .map(|(op, _)| *op)
}

impl UnaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        lookup_operator(UNARY_SYMBOLS, symbol)
    }

    pub fn as_str(&self) -> &'static str {
        lookup_symbol(UNARY_SYMBOLS, *self)
    }
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        lookup_operator(BINARY_SYMBOLS, symbol)
    }

    pub fn as_str(&self) -> &'static str {
        lookup_symbol(BINARY_SYMBOLS, *self)
    }
}

impl LogicalOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        lookup_operator(LOGICAL_SYMBOLS, symbol)
    }

    pub fn as_str(&self) -> &'static str {
        lookup_symbol(LOGICAL_SYMBOLS, *self)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Expr {
    /// Returns the name of this node's kind, as used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Identifier(_) => "Identifier",
            Expr::Literal(_) => "Literal",
            Expr::MemberAccess { .. } => "MemberAccess",
            Expr::FunctionExpr { .. } => "FunctionExpr",
            Expr::FunctionDecl { .. } => "FunctionDecl",
            Expr::Call { .. } => "Call",
            Expr::ThisRef => "ThisRef",
            Expr::ObjectLiteral => "ObjectLiteral",
            Expr::ArrayLiteral => "ArrayLiteral",
            Expr::UnaryOp { .. } => "UnaryOp",
            Expr::BinaryOp { .. } => "BinaryOp",
            Expr::AssignmentOp { .. } => "AssignmentOp",
            Expr::UpdateOp { .. } => "UpdateOp",
            Expr::LogicalOp { .. } => "LogicalOp",
            Expr::ConditionalOp { .. } => "ConditionalOp",
            Expr::ConstructorCall { .. } => "ConstructorCall",
        }
    }

    /// Number of nodes in this tree, counting this one.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Expr::MemberAccess { object, property } => object.node_count() + property.node_count(),
            Expr::Call { callee } | Expr::ConstructorCall { callee } => callee.node_count(),
            Expr::UnaryOp { argument, .. } | Expr::UpdateOp { argument, .. } => {
                argument.node_count()
            }
            Expr::BinaryOp { left, right, .. }
            | Expr::AssignmentOp { left, right }
            | Expr::LogicalOp { left, right, .. } => left.node_count() + right.node_count(),
            Expr::ConditionalOp {
                consequent,
                alternate,
            } => consequent.node_count() + alternate.node_count(),
            Expr::Identifier(_)
            | Expr::Literal(_)
            | Expr::FunctionExpr { .. }
            | Expr::FunctionDecl { .. }
            | Expr::ThisRef
            | Expr::ObjectLiteral
            | Expr::ArrayLiteral => 0,
        }
    }
}

impl LiteralValue {
    /// The literal's kind, as used in log lines.
    pub fn category(&self) -> &'static str {
        match self {
            LiteralValue::Number(_) => "number",
            LiteralValue::String(_) => "string",
            LiteralValue::Boolean(_) => "boolean",
            LiteralValue::Null => "null",
            LiteralValue::Regex { .. } => "regex",
            LiteralValue::Absent => "absent",
        }
    }
}
