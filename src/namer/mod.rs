//! # Expression Namer
//!
//! The rule table. Every [`Expr`] kind maps to exactly one naming rule; a rule
//! asks for the candidates of the node's children and arranges them with the
//! [`crate::sequence`] combinators into one ordered, lazy sequence. Earlier
//! candidates are the more specific ones.
//!
//! Rules live next to the kinds they name:
//!
//! - [`leaves`]: identifiers, literals, functions, and the fixed-word kinds
//! - [`compound`]: member access, calls, constructors, assignment, conditionals
//! - [`operators`]: unary, binary, logical, and update operators
//!
//! The raw rule output may contain strings that are not identifiers (`"0"`
//! for `list[0]`); [`ExpressionNamer::names`] filters those at the boundary.

mod compound;
mod leaves;
mod operators;

use crate::ast::Expr;
use crate::config::{NamerConfig, Profile};
use crate::format::is_valid_identifier;
use crate::sequence::{filter, materialize, CandidateSequence};
use crate::speech::{SpeechExtractor, SubjectExtractor};

/// Proposes names for expressions.
///
/// Holds no state between calls; the same tree, parent and configuration
/// always produce the same candidates in the same order.
///
/// # Examples
///
/// ```rust
/// use nomen::ast::builder::{call, ident};
/// use nomen::{ExpressionNamer, NamerConfig};
///
/// let namer = ExpressionNamer::new(NamerConfig::default());
/// let expr = call(ident("getFirstPerson"));
/// assert_eq!(
///     namer.all_names(&expr),
///     vec!["firstPerson", "result", "getFirstPersonResult"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionNamer<X = SpeechExtractor> {
    config: NamerConfig,
    extractor: X,
}

impl ExpressionNamer<SpeechExtractor> {
    pub fn new(config: NamerConfig) -> Self {
        Self::with_extractor(config, SpeechExtractor)
    }
}

impl Default for ExpressionNamer<SpeechExtractor> {
    fn default() -> Self {
        Self::new(NamerConfig::default())
    }
}

impl<X: SubjectExtractor> ExpressionNamer<X> {
    /// Creates a namer that asks `extractor` for the subject of call names.
    pub fn with_extractor(config: NamerConfig, extractor: X) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &NamerConfig {
        &self.config
    }

    /// Valid identifier candidates for `expr`, best first.
    pub fn names<'a>(&'a self, expr: &'a Expr) -> CandidateSequence<'a> {
        self.names_with_parent(expr, None)
    }

    /// Like [`names`](Self::names), for an `expr` that sits directly inside `parent`.
    pub fn names_with_parent<'a>(
        &'a self,
        expr: &'a Expr,
        parent: Option<&'a Expr>,
    ) -> CandidateSequence<'a> {
        filter(self.names_for(expr, parent), |candidate| {
            is_valid_identifier(candidate)
        })
    }

    /// Every valid candidate for `expr`, in order.
    pub fn all_names(&self, expr: &Expr) -> Vec<String> {
        materialize(self.names(expr))
    }

    /// Raw rule output for `expr`, before identifier filtering.
    ///
    /// `parent` is the node immediately enclosing `expr`, when there is one.
    /// Only some rules look at it: a numeric literal names itself by its
    /// digits when it has a parent.
    pub fn names_for<'a>(&'a self, expr: &'a Expr, parent: Option<&'a Expr>) -> CandidateSequence<'a> {
        log::trace!(
            "naming {} (parent: {})",
            expr.kind(),
            parent.map_or("none", Expr::kind)
        );

        match expr {
            Expr::Identifier(name) => leaves::identifier(name),
            Expr::Literal(value) => leaves::literal(value, parent, self.config.profile),
            Expr::FunctionExpr { name } | Expr::FunctionDecl { name } => {
                leaves::function(name.as_deref())
            }
            Expr::ThisRef => leaves::this_ref(),
            Expr::ObjectLiteral => leaves::object_literal(),
            Expr::ArrayLiteral => leaves::array_literal(),
            Expr::MemberAccess { object, property } => self.member_access(expr, object, property),
            Expr::Call { callee } => self.call(callee),
            Expr::ConstructorCall { callee } => self.constructor_call(callee),
            Expr::AssignmentOp { left, right } => self.assignment(expr, left, right),
            Expr::ConditionalOp {
                consequent,
                alternate,
            } => self.conditional(consequent, alternate),
            Expr::UnaryOp { operator, argument } => self.unary(expr, *operator, argument),
            Expr::BinaryOp {
                operator,
                left,
                right,
            } => self.binary(*operator, left, right),
            Expr::LogicalOp {
                operator,
                left,
                right,
            } => self.logical(*operator, left, right),
            Expr::UpdateOp { prefix, argument } => self.update(*prefix, argument),
        }
    }

    fn offers_my_tier(&self) -> bool {
        self.config.profile == Profile::ContextSensitive
    }
}
