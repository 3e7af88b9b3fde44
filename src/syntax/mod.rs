//! Source front-end.
//!
//! Parses a JavaScript expression with a pest grammar and builds the
//! [`crate::ast::Expr`] the namer consumes. Covers identifiers, literals
//! (numbers, strings, regexes, `null`, booleans), `this`, functions, object
//! and array literals, member access, calls, `new`, and the unary, update,
//! binary, logical, conditional, and assignment operators.

mod parser;

pub use parser::{parse, parse_named};
