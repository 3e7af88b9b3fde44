//! # Nomen
//!
//! Proposes identifier names for JavaScript expressions, ordered from most
//! to least specific, so tooling can pick a sensible variable name without
//! asking the user.
//!
//! ```rust
//! let names = nomen::names_for_source("string.indexOf(prefix)").unwrap();
//! assert_eq!(
//!     names,
//!     vec!["index", "stringIndex", "result", "indexOfResult", "stringIndexOfResult"]
//! );
//! ```
//!
//! ## Layout
//!
//! - [`ast`]: the expression tree the namer reads
//! - [`sequence`]: lazy candidate sequences and their combinators
//! - [`format`]: camel-case joining and the identifier grammar
//! - [`speech`]: subject extraction from call names
//! - [`namer`]: the per-kind naming rules
//! - [`syntax`], [`estree`]: front-ends that build trees from source or ESTree JSON
//! - [`config`], [`errors`], [`cli`]: configuration, diagnostics, and the `nomen` binary

use once_cell::sync::Lazy;

pub mod ast;
pub mod cli;
pub mod config;
pub mod errors;
pub mod estree;
pub mod format;
pub mod namer;
pub mod sequence;
pub mod speech;
pub mod syntax;

pub use ast::Expr;
pub use config::{NamerConfig, Profile};
pub use errors::{ErrorKind, NomenError};
pub use namer::ExpressionNamer;
pub use sequence::CandidateSequence;
pub use speech::{SpeechExtractor, SubjectExtractor};

static DEFAULT_NAMER: Lazy<ExpressionNamer> = Lazy::new(|| ExpressionNamer::new(NamerConfig::default()));

/// Lazily yields valid names for `expr` using the default configuration.
pub fn names_for_expression(expr: &Expr) -> CandidateSequence<'_> {
    DEFAULT_NAMER.names(expr)
}

/// Every valid name for `expr` using the default configuration.
pub fn all_names_for_expression(expr: &Expr) -> Vec<String> {
    DEFAULT_NAMER.all_names(expr)
}

/// Parses `source` as a JavaScript expression and names it.
pub fn names_for_source(source: &str) -> Result<Vec<String>, NomenError> {
    let expr = syntax::parse(source)?;
    Ok(all_names_for_expression(&expr))
}
