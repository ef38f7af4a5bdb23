//! Errors produced while evaluating, and the error type covering a whole line.
//!
//! Messages are fixed at the point of detection and reach the shell
//! unchanged; nothing wraps or prefixes them on the way up.

use crate::builtin::Builtin;
use crate::value::ValueKind;
use std::fmt;
use yalisp_syntax::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticLevel};
use yalisp_syntax::error::ParseError;
use yalisp_syntax::span::{Span, Spanned};

/// Errors that can occur while evaluating a parsed [`Node`](yalisp_syntax::Node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A symbol outside operator position, such as a bare `x`.
    BareSymbolNotEvaluable {
        /// The symbol text
        name: String,
        /// Location of the symbol
        span: Span,
    },

    /// `()`
    EmptyListNotEvaluable {
        /// Location of the list
        span: Span,
    },

    /// A list whose first element is not a symbol, such as `(1 2)`.
    OperatorMustBeSymbol {
        /// Location of the first element
        span: Span,
    },

    /// A symbol in operator position that names no built-in.
    UnknownOperator {
        /// The symbol text
        name: String,
        /// Location of the symbol
        span: Span,
    },

    /// An argument evaluated to the wrong kind of value.
    TypeMismatch {
        /// The operator being applied
        operator: Builtin,
        /// What the argument evaluated to
        found: ValueKind,
        /// Location of the argument
        span: Span,
    },

    /// Too few arguments for the operator.
    ArityError {
        /// The operator being applied
        operator: Builtin,
        /// Arguments supplied
        found: usize,
        /// Location of the whole call
        span: Span,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BareSymbolNotEvaluable { .. } => {
                write!(f, "Cannot evaluate a standalone symbol")
            }
            Self::EmptyListNotEvaluable { .. } => write!(f, "Cannot evaluate an empty list"),
            Self::OperatorMustBeSymbol { .. } => {
                write!(f, "First element of a list must be a symbol (operator)")
            }
            Self::UnknownOperator { .. } => write!(f, "Unknown operator"),
            Self::TypeMismatch { operator, .. } => match operator.operand_kind() {
                ValueKind::Int => write!(f, "Non-integer argument to {operator}"),
                ValueKind::Str => write!(f, "Non-string argument to {operator}"),
            },
            Self::ArityError { operator, .. } => match operator.min_args() {
                1 => write!(f, "Operator {operator} requires at least one argument"),
                min => write!(f, "Operator {operator} requires at least {min} arguments"),
            },
        }
    }
}

impl std::error::Error for EvalError {}

impl Spanned for EvalError {
    fn span(&self) -> Span {
        match self {
            Self::BareSymbolNotEvaluable { span, .. }
            | Self::EmptyListNotEvaluable { span }
            | Self::OperatorMustBeSymbol { span }
            | Self::UnknownOperator { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::ArityError { span, .. } => *span,
        }
    }
}

impl EvalError {
    /// Describes this error as an error-level diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::new(DiagnosticLevel::Error, self.to_string(), self.span());
        match self {
            Self::BareSymbolNotEvaluable { name, .. } if name.is_empty() => {
                builder.suggest("remove the unmatched ')'")
            }
            Self::BareSymbolNotEvaluable { name, .. } => {
                builder.suggest(format!("symbols can only be called, as in ({name} ...)"))
            }
            Self::EmptyListNotEvaluable { .. } | Self::OperatorMustBeSymbol { .. } => {
                builder.suggest(format!("start the list with one of: {}", Builtin::names()))
            }
            Self::UnknownOperator { name, .. } => builder
                .note(format!("`{name}` is not a built-in"), self.span())
                .suggest(format!("known operators are: {}", Builtin::names())),
            Self::TypeMismatch { operator, found, .. } => builder.suggest(format!(
                "`{operator}` takes {} arguments, this one is a {found}",
                operator.operand_kind()
            )),
            Self::ArityError { found, .. } => {
                builder.note(format!("called with {found} arguments"), self.span())
            }
        }
        .build()
    }
}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Anything that can go wrong with one line of input.
///
/// This type unifies parse and evaluation errors the way the shell reports
/// them: its `Display` is the inner message, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line did not parse
    Parse(ParseError),

    /// The line parsed but did not evaluate
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::Eval(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Eval(err) => Some(err),
        }
    }
}

impl Spanned for Error {
    fn span(&self) -> Span {
        match self {
            Self::Parse(err) => err.span(),
            Self::Eval(err) => err.span(),
        }
    }
}

impl Error {
    /// Describes this error as an error-level diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Parse(err) => err.to_diagnostic(),
            Self::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}
