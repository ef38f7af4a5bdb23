//! Source locations for AST nodes and errors.
//!
//! A [`Span`] is a half-open byte range into the line that was parsed. Line
//! and column numbers are only needed when rendering diagnostics, so they are
//! computed on demand with [`LineCol::locate`] instead of being stored in
//! every node.
//!
//! # Examples
//!
//! ```
//! use yalisp_syntax::span::{LineCol, Span};
//!
//! let source = "(+ 1\n   x)";
//! let span = Span::new(8, 9);
//!
//! assert_eq!(&source[span.range()], "x");
//! assert_eq!(LineCol::locate(source, span.start), LineCol::new(2, 4));
//! ```

use std::fmt;
use std::ops::Range;

/// A half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,

    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a zero-length span, used for end-of-input positions.
    ///
    /// ```
    /// use yalisp_syntax::span::Span;
    ///
    /// let eof = Span::point(7);
    /// assert!(eof.is_empty());
    /// ```
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for zero-length spans.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a range suitable for slicing the source.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-indexed line and column (column counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub col: usize,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Finds the line and column of byte `offset` in `source`.
    ///
    /// Offsets past the end of `source` resolve to the position just after
    /// the last character.
    #[must_use]
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut col = 1;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Types that know where they came from in the source.
pub trait Spanned {
    /// Returns the source span of this item.
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(6, 13);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point_is_empty() {
        assert!(Span::point(3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(2, 9).to_string(), "2..9");
    }

    #[test]
    fn test_locate_first_line() {
        assert_eq!(LineCol::locate("(+ 1 2)", 0), LineCol::new(1, 1));
        assert_eq!(LineCol::locate("(+ 1 2)", 3), LineCol::new(1, 4));
    }

    #[test]
    fn test_locate_after_newline() {
        let source = "(concat\n\"a\")";
        assert_eq!(LineCol::locate(source, 8), LineCol::new(2, 1));
    }

    #[test]
    fn test_locate_counts_chars_not_bytes() {
        // "é" is two bytes wide.
        assert_eq!(LineCol::locate("\"é\" x", 5), LineCol::new(1, 5));
    }

    #[test]
    fn test_locate_past_end() {
        assert_eq!(LineCol::locate("ab", 10), LineCol::new(1, 3));
    }

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol::new(5, 10).to_string(), "5:10");
    }
}
