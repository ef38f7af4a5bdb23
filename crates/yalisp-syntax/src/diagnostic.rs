//! Source-highlighted error reports.
//!
//! The shell always prints the short `Error: <message>` line. With
//! diagnostics enabled it also renders a [`Diagnostic`] that points at the
//! offending part of the input:
//!
//! ```text
//! 1:10: error: Unterminated string literal in input
//!    1 | (concat "abc
//!      |         ^^^^
//! ```

use crate::error::ParseError;
use crate::span::{LineCol, Span, Spanned};
use std::fmt;
use std::io::{self, Write};

/// A diagnostic message with its suggestions and notes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Diagnostic level
    pub level: DiagnosticLevel,
    /// Primary message
    pub message: String,
    /// Source span
    pub span: Span,
    /// Suggestions printed as `help:` lines
    pub suggestions: Vec<String>,
    /// Related notes
    pub notes: Vec<DiagnosticNote>,
}

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// The line could not be evaluated
    Error,
    /// Additional information
    Note,
    /// Suggestion for fixing the issue
    Help,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Note => write!(f, "note"),
            Self::Help => write!(f, "help"),
        }
    }
}

impl DiagnosticLevel {
    /// Returns the ANSI color code for this level.
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Note => "\x1b[36m",
            Self::Help => "\x1b[32m",
        }
    }

    /// Returns the reset ANSI code.
    #[must_use]
    pub const fn reset_code() -> &'static str {
        "\x1b[0m"
    }

    /// Formats this level, wrapped in its color if `use_colors` is set.
    #[must_use]
    pub fn format_colored(&self, use_colors: bool) -> String {
        if use_colors {
            format!("{}{}{}", self.color_code(), self, Self::reset_code())
        } else {
            self.to_string()
        }
    }
}

/// A note attached to a diagnostic.
#[derive(Debug, Clone)]
pub struct DiagnosticNote {
    /// Note message
    pub message: String,
    /// Source span
    pub span: Span,
}

/// Builder for creating diagnostics.
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Creates a new diagnostic builder.
    #[must_use]
    pub fn new(level: DiagnosticLevel, message: impl Into<String>, span: Span) -> Self {
        Self {
            diagnostic: Diagnostic {
                level,
                message: message.into(),
                span,
                suggestions: Vec::new(),
                notes: Vec::new(),
            },
        }
    }

    /// Adds a suggestion to the diagnostic.
    #[must_use]
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.diagnostic.suggestions.push(suggestion.into());
        self
    }

    /// Adds a note to the diagnostic.
    #[must_use]
    pub fn note(mut self, message: impl Into<String>, span: Span) -> Self {
        self.diagnostic.notes.push(DiagnosticNote {
            message: message.into(),
            span,
        });
        self
    }

    /// Builds the diagnostic.
    #[must_use]
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}

impl ParseError {
    /// Describes this error as an error-level diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::new(DiagnosticLevel::Error, self.to_string(), self.span());
        match self {
            Self::UnmatchedOpenParen { .. } => builder.suggest("add a closing ')'"),
            Self::UnterminatedString { .. } => builder.suggest("add a closing '\"'"),
            Self::UnexpectedEndOfInput { .. } => builder,
            Self::NestingTooDeep { .. } => builder.note(
                format!("lists may nest at most {} levels", crate::parser::MAX_DEPTH),
                self.span(),
            ),
        }
        .build()
    }
}

/// Renders diagnostics against the source they refer to.
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    use_colors: bool,
}

impl Emitter {
    /// Creates a new diagnostic emitter.
    #[must_use]
    pub const fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes `diagnostic` with the relevant source lines underlined.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn emit(&self, out: &mut impl Write, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        let span = diagnostic.span;
        let start = LineCol::locate(source, span.start);

        let level = diagnostic.level.format_colored(self.use_colors);
        writeln!(out, "{start}: {level}: {}", diagnostic.message)?;

        self.emit_source_highlight(out, diagnostic.level, span, source)?;

        for suggestion in &diagnostic.suggestions {
            let help = DiagnosticLevel::Help.format_colored(self.use_colors);
            writeln!(out, "   {help}: {suggestion}")?;
        }

        for note in &diagnostic.notes {
            let prefix = DiagnosticLevel::Note.format_colored(self.use_colors);
            let at = LineCol::locate(source, note.span.start);
            writeln!(out, "   {prefix} at {at}: {}", note.message)?;
        }

        Ok(())
    }

    /// Renders into a `String`, for callers that buffer output.
    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.emit(&mut buf, diagnostic, source);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn emit_source_highlight(
        &self,
        out: &mut impl Write,
        level: DiagnosticLevel,
        span: Span,
        source: &str,
    ) -> io::Result<()> {
        let lines: Vec<&str> = source.split('\n').collect();
        let start = LineCol::locate(source, span.start);
        let end = LineCol::locate(source, span.end);

        let first = start.line - 1;
        let last = (end.line - 1).min(lines.len() - 1);

        for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
            writeln!(out, "{:4} | {line}", idx + 1)?;

            let from = if idx == first { start.col } else { 1 };
            let to = if idx == end.line - 1 {
                end.col
            } else {
                line.chars().count() + 1
            };
            let width = to.saturating_sub(from).max(1);
            let carets = "^".repeat(width);
            let indent = " ".repeat(from - 1);

            if self.use_colors {
                let reset = DiagnosticLevel::reset_code();
                writeln!(out, "     | {indent}{}{carets}{reset}", level.color_code())?;
            } else {
                writeln!(out, "     | {indent}{carets}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_level_display() {
        assert_eq!(DiagnosticLevel::Error.to_string(), "error");
        assert_eq!(DiagnosticLevel::Note.to_string(), "note");
        assert_eq!(DiagnosticLevel::Help.to_string(), "help");
    }

    #[test]
    fn test_diagnostic_level_colors() {
        assert_eq!(DiagnosticLevel::Error.format_colored(false), "error");

        let colored = DiagnosticLevel::Error.format_colored(true);
        assert!(colored.starts_with("\x1b[31m"));
        assert!(colored.contains("error"));
    }

    #[test]
    fn test_diagnostic_builder() {
        let diagnostic = DiagnosticBuilder::new(DiagnosticLevel::Error, "bad", Span::new(0, 1))
            .suggest("try this instead")
            .note("opened here", Span::point(0))
            .build();

        assert_eq!(diagnostic.suggestions, ["try this instead"]);
        assert_eq!(diagnostic.notes[0].message, "opened here");
    }

    #[test]
    fn test_emit_underlines_span() {
        let source = "(concat \"abc";
        let err = ParseError::UnterminatedString {
            start: Span::new(8, 12),
        };

        let rendered = Emitter::new(false).render(&err.to_diagnostic(), source);
        assert_eq!(
            rendered,
            "1:9: error: Unterminated string literal in input\n\
             \x20  1 | (concat \"abc\n\
             \x20    |         ^^^^\n\
             \x20  help: add a closing '\"'\n"
        );
    }

    #[test]
    fn test_emit_point_span_gets_one_caret() {
        let source = "   ";
        let err = ParseError::UnexpectedEndOfInput {
            span: Span::point(3),
        };

        let rendered = Emitter::new(false).render(&err.to_diagnostic(), source);
        assert!(rendered.starts_with("1:4: error: Unexpected end of input\n"));
        assert!(rendered.ends_with("     |    ^\n"));
    }

    #[test]
    fn test_emit_multiline_span() {
        let source = "(+ 1\n2";
        let diagnostic =
            DiagnosticBuilder::new(DiagnosticLevel::Error, "oops", Span::new(0, 6)).build();

        let rendered = Emitter::new(false).render(&diagnostic, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "   1 | (+ 1");
        assert_eq!(lines[2], "     | ^^^^");
        assert_eq!(lines[3], "   2 | 2");
        assert_eq!(lines[4], "     | ^");
    }

    #[test]
    fn test_emit_note_location() {
        let source = "(x)";
        let diagnostic = DiagnosticBuilder::new(DiagnosticLevel::Error, "e", Span::new(1, 2))
            .note("list starts here", Span::point(0))
            .build();

        let rendered = Emitter::new(false).render(&diagnostic, source);
        assert!(rendered.ends_with("   note at 1:1: list starts here\n"));
    }

    #[test]
    fn test_emit_with_colors() {
        let diagnostic =
            DiagnosticBuilder::new(DiagnosticLevel::Error, "e", Span::new(0, 1)).build();
        let rendered = Emitter::new(true).render(&diagnostic, "x");
        assert!(rendered.contains("\x1b[31m^\x1b[0m"));
    }
}
