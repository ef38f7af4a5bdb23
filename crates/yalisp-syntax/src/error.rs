//! Errors produced while parsing.
//!
//! Each variant records where in the line the problem was found. The
//! `Display` text is the message the shell prints after `Error: `.

use crate::span::{Span, Spanned};
use std::fmt;

/// Errors that can occur while turning text into a [`Node`](crate::ast::Node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before a `(` was closed.
    ///
    /// ```text
    /// (+ 1 2
    /// ^
    /// error: Unmatched '(' in input
    /// ```
    UnmatchedOpenParen {
        /// Location of the opening parenthesis
        open: Span,
    },

    /// Input ended before a string's closing `"`.
    ///
    /// ```text
    /// (concat "abc
    ///         ^---
    /// error: Unterminated string literal in input
    /// ```
    UnterminatedString {
        /// From the opening quote to the end of input
        start: Span,
    },

    /// Only whitespace remained where an expression was expected.
    UnexpectedEndOfInput {
        /// End-of-input position
        span: Span,
    },

    /// Lists nested deeper than [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
    NestingTooDeep {
        /// Location of the `(` that went past the limit
        open: Span,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedOpenParen { .. } => write!(f, "Unmatched '(' in input"),
            Self::UnterminatedString { .. } => {
                write!(f, "Unterminated string literal in input")
            }
            Self::UnexpectedEndOfInput { .. } => write!(f, "Unexpected end of input"),
            Self::NestingTooDeep { .. } => write!(f, "Expression nested too deeply"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Spanned for ParseError {
    fn span(&self) -> Span {
        match self {
            Self::UnmatchedOpenParen { open } | Self::NestingTooDeep { open } => *open,
            Self::UnterminatedString { start } => *start,
            Self::UnexpectedEndOfInput { span } => *span,
        }
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
