//! Error types and result aliases for the DWISLPY front end.

use crate::Span;
use miette::{Diagnostic, LabeledSpan, SourceSpan};
use std::fmt;
use thiserror::Error;

/// The kind of a static-semantic violation.
///
/// Every check stops at the first violation, so a failed run reports exactly
/// one of these together with a message and the offending node's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A variable, function or procedure name that is not in scope.
    UnknownIdentifier,
    /// A name introduced twice in the same scope.
    DuplicateBinding,
    /// An expression type that disagrees with the type its context requires.
    TypeMismatch,
    /// A call whose argument count differs from the callee's formal count.
    ArityMismatch,
    /// An `if`/`while` condition that is not `bool`.
    NonBooleanCondition,
    /// An operator applied to operand types it does not support.
    InvalidOperandTypes,
    /// `int(...)` or `input(...)` applied to an operand it cannot convert.
    InvalidConversion,
    /// A definition body with no path that returns.
    MissingReturn,
    /// A definition body with some path that falls off the end.
    PossiblyMissingReturn,
    /// A return statement where no return is legal.
    UnexpectedReturn,
}

impl ErrorKind {
    /// Stable snake-case identifier; the diagnostic code is `dwislpy::<code>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::UnknownIdentifier => "unknown_identifier",
            ErrorKind::DuplicateBinding => "duplicate_binding",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::ArityMismatch => "arity_mismatch",
            ErrorKind::NonBooleanCondition => "non_boolean_condition",
            ErrorKind::InvalidOperandTypes => "invalid_operand_types",
            ErrorKind::InvalidConversion => "invalid_conversion",
            ErrorKind::MissingReturn => "missing_return",
            ErrorKind::PossiblyMissingReturn => "possibly_missing_return",
            ErrorKind::UnexpectedReturn => "unexpected_return",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::UnknownIdentifier => "unknown identifier",
            ErrorKind::DuplicateBinding => "duplicate binding",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::ArityMismatch => "arity mismatch",
            ErrorKind::NonBooleanCondition => "non-boolean condition",
            ErrorKind::InvalidOperandTypes => "invalid operand types",
            ErrorKind::InvalidConversion => "invalid conversion",
            ErrorKind::MissingReturn => "missing return",
            ErrorKind::PossiblyMissingReturn => "possibly missing return",
            ErrorKind::UnexpectedReturn => "unexpected return",
        };
        f.write_str(text)
    }
}

/// A static-semantic violation: the kind tag, a message, and where it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct SemanticError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl Diagnostic for SemanticError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("dwislpy::{}", self.kind.code())))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Main error type for the DWISLPY front end.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Lexer error: {0}")]
    #[diagnostic(code(dwislpy::lexer))]
    Lexer(String, #[label("here")] Span),

    #[error("Parser error: {0}")]
    #[diagnostic(code(dwislpy::parser))]
    Parser(String, #[label("here")] Span),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Semantic(#[from] SemanticError),
}

impl Error {
    /// Builds a semantic error.
    pub fn semantic(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Error::Semantic(SemanticError {
            kind,
            message: message.into(),
            span,
        })
    }

    /// The semantic error kind, if this is a semantic error.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Semantic(err) => Some(err.kind),
            _ => None,
        }
    }

    /// The source span the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Error::Lexer(_, span) | Error::Parser(_, span) => *span,
            Error::Semantic(err) => err.span,
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the DWISLPY Error type.
pub type Result<T> = std::result::Result<T, Error>;
