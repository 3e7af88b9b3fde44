//! Nomen Error Handling
//!
//! One error type for every failure the crate can report. The naming engine
//! itself never fails: an expression with no plausible name yields an empty
//! candidate sequence. Errors only come from the boundaries that build
//! expression trees (source parser, ESTree loader) and from configuration.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT
// ============================================================================

/// Source text an error can point into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from real input text.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }

    /// Creates an error labelled at `span` inside this source.
    pub fn report(&self, kind: ErrorKind, span: SourceSpan) -> NomenError {
        let error_code = format!("nomen::{}", kind.code_suffix());
        NomenError {
            kind,
            source_info: Some(SourceInfo {
                source: self.to_named_source(),
                primary_span: span,
            }),
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// The single error type.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct NomenError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Where it happened, when the input had source text
    pub source_info: Option<SourceInfo>,
    pub diagnostic_info: DiagnosticInfo,
}

/// All error kinds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    // Source front-end
    #[error("syntax error: {message}")]
    Syntax { message: String },
    #[error("invalid {literal_type} literal '{value}'")]
    InvalidLiteral { literal_type: String, value: String },

    // Expression-tree input
    #[error("unsupported expression kind: {kind}")]
    UnsupportedKind { kind: String },
    #[error("malformed {kind}: missing or invalid field `{field}`")]
    MalformedNode { kind: String, field: String },
    #[error("unknown {kind} operator '{operator}'")]
    UnknownOperator { kind: String, operator: String },

    // Environment
    #[error("invalid configuration: {message}")]
    Config { message: String },
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Input,
    Config,
    Io,
}

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl ErrorKind {
    /// Get the error category for test assertions
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Syntax { .. } | Self::InvalidLiteral { .. } => ErrorCategory::Syntax,
            Self::UnsupportedKind { .. }
            | Self::MalformedNode { .. }
            | Self::UnknownOperator { .. } => ErrorCategory::Input,
            Self::Config { .. } => ErrorCategory::Config,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Get error code suffix for diagnostic codes
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "syntax",
            Self::InvalidLiteral { .. } => "invalid_literal",
            Self::UnsupportedKind { .. } => "unsupported_kind",
            Self::MalformedNode { .. } => "malformed_node",
            Self::UnknownOperator { .. } => "unknown_operator",
            Self::Config { .. } => "config",
            Self::Io { .. } => "io",
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "unexpected input here",
            Self::InvalidLiteral { .. } => "invalid literal",
            Self::UnsupportedKind { .. } => "unsupported node",
            Self::MalformedNode { .. } => "malformed node",
            Self::UnknownOperator { .. } => "unknown operator",
            Self::Config { .. } => "invalid setting",
            Self::Io { .. } => "unreadable input",
        }
    }
}

impl NomenError {
    /// Creates an error that is not tied to any source text.
    pub fn bare(kind: ErrorKind) -> Self {
        let error_code = format!("nomen::{}", kind.code_suffix());
        Self {
            kind,
            source_info: None,
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic_info.help = Some(help.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl Diagnostic for NomenError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let info = self.source_info.as_ref()?;
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.primary_label().to_string()),
            info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_info
            .as_ref()
            .map(|info| &*info.source as &dyn miette::SourceCode)
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a NomenError with full miette diagnostics to stderr.
pub fn print_error(error: NomenError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_kind_message_names_the_kind() {
        let err = NomenError::bare(ErrorKind::UnsupportedKind {
            kind: "SequenceExpression".into(),
        });
        assert_eq!(
            err.to_string(),
            "unsupported expression kind: SequenceExpression"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.diagnostic_info.error_code, "nomen::unsupported_kind");
    }

    #[test]
    fn bare_errors_have_no_labels() {
        let err = NomenError::bare(ErrorKind::Config {
            message: "bad".into(),
        });
        assert!(err.labels().is_none());
        assert!(err.source_code().is_none());
    }

    #[test]
    fn reported_errors_render_their_label() {
        let ctx = SourceContext::from_file("input.js", "foo(");
        let err = ctx
            .report(
                ErrorKind::Syntax {
                    message: "expected expression".into(),
                },
                (4..4).into(),
            )
            .with_help("close the argument list");
        let output = format!("{:?}", miette::Report::new(err));
        assert!(output.contains("nomen::syntax"));
        assert!(output.contains("close the argument list"));
    }

    #[test]
    fn reported_errors_point_into_the_real_input() {
        let ctx = SourceContext::from_file("<argument>", "a +");
        let err = ctx.report(
            ErrorKind::Syntax {
                message: "expected operand".into(),
            },
            (3..3).into(),
        );
        let info = err.source_info.as_ref().unwrap();
        assert_eq!(info.source.name(), "<argument>");
        assert_eq!(info.source.inner(), "a +");
        assert_eq!(info.primary_span.offset(), 3);
    }
}
