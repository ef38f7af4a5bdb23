//! Recursive descent parser for YALisp.
//!
//! There is no separate lexer: the grammar is small enough that each
//! production reads characters straight from the input.
//!
//! ```text
//! expr    := ws* ( list | integer | string | symbol )
//! list    := "(" expr* ws* ")"
//! integer := digit+
//! string  := '"' [^"]* '"'
//! symbol  := [^ \t\n)]*
//! ws      := " " | "\t" | "\n"
//! ```
//!
//! Symbols only stop at whitespace or `)`, so `(+1 2)` reads `+1` as a
//! single symbol and `a(b` is one symbol too. A `)` where an expression
//! should start reads as the empty symbol.
//!
//! Lists may nest at most [`MAX_DEPTH`] levels. Every recursive walk over a
//! parsed tree relies on that bound to stay within the stack.

use crate::ast::Node;
use crate::error::{ParseError, ParseResult};
use crate::span::Span;
use yalisp_log::trace;

/// Deepest list nesting the parser accepts.
pub const MAX_DEPTH: usize = 512;

/// Parses one expression from `text`, starting at byte offset `*cursor`.
///
/// On return `*cursor` points just past the expression, or at the place
/// where parsing failed. Anything after the expression is left unread, so
/// several top-level expressions can be read by calling this again with the
/// same cursor.
///
/// # Examples
///
/// ```
/// use yalisp_syntax::parser::parse;
///
/// let mut cursor = 0;
/// let node = parse("(+ 1 2) rest", &mut cursor).unwrap();
///
/// assert_eq!(node.to_string(), "(+ 1 2)");
/// assert_eq!(cursor, 7);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for an unclosed list or string, for input that
/// holds only whitespace, or for lists nested deeper than [`MAX_DEPTH`].
pub fn parse(text: &str, cursor: &mut usize) -> ParseResult<Node> {
    let mut parser = Parser::at(text, *cursor);
    let result = parser.parse_expr();
    *cursor = parser.position();
    result
}

/// Parser state: the input line and a byte cursor into it.
///
/// The cursor only ever advances by whole characters, so it always sits on a
/// UTF-8 boundary of `input`.
#[derive(Debug, Clone)]
pub struct Parser<'input> {
    /// The text being parsed
    input: &'input str,
    /// Byte offset of the next unread character
    pos: usize,
    /// Lists currently open
    depth: usize,
}

impl<'input> Parser<'input> {
    /// Creates a parser positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'input str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Creates a parser positioned at byte offset `pos`.
    ///
    /// A `pos` past the end, or inside a multi-byte character, reads as end
    /// of input.
    #[must_use]
    pub const fn at(input: &'input str, pos: usize) -> Self {
        Self {
            input,
            pos,
            depth: 0,
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if nothing but whitespace is left.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.rest().chars().all(is_whitespace)
    }

    /// Unread input, empty if the cursor is not on a char boundary.
    fn rest(&self) -> &'input str {
        self.input.get(self.pos..).unwrap_or("")
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    /// Parses the next expression.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        self.skip_whitespace();
        let start = self.pos;

        match self.peek() {
            None => Err(ParseError::UnexpectedEndOfInput {
                span: Span::point(self.pos),
            }),
            Some('(') => self.parse_list(start),
            Some('0'..='9') => Ok(self.parse_integer(start)),
            Some('"') => self.parse_string(start),
            Some(_) => Ok(self.parse_symbol(start)),
        }
    }

    /// Parses `( expr* )`. The cursor is on the opening parenthesis.
    fn parse_list(&mut self, start: usize) -> ParseResult<Node> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                open: Span::new(start, start + 1),
            });
        }

        self.depth += 1;
        let result = self.parse_list_items(start);
        self.depth -= 1;
        result
    }

    fn parse_list_items(&mut self, start: usize) -> ParseResult<Node> {
        trace!("list at {start} depth {}", self.depth);
        self.bump(); // consume '('

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(ParseError::UnmatchedOpenParen {
                        open: Span::new(start, start + 1),
                    });
                }
                Some(')') => {
                    self.bump();
                    break;
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }

        Ok(Node::List {
            items,
            span: Span::new(start, self.pos),
        })
    }

    /// Parses a run of ASCII digits.
    fn parse_integer(&mut self, start: usize) -> Node {
        let mut value: i64 = 0;
        while let Some(digit) = self.peek().and_then(|ch| ch.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(i64::from(digit));
            self.bump();
        }

        trace!("integer {value} at {start}");
        Node::IntLiteral {
            value,
            span: Span::new(start, self.pos),
        }
    }

    /// Parses `"..."`. The cursor is on the opening quote.
    fn parse_string(&mut self, start: usize) -> ParseResult<Node> {
        self.bump(); // consume opening '"'
        let body_start = self.pos;

        while self.peek().is_some_and(|ch| ch != '"') {
            self.bump();
        }
        if self.peek().is_none() {
            return Err(ParseError::UnterminatedString {
                start: Span::new(start, self.pos),
            });
        }

        let body = Span::new(body_start, self.pos);
        let value = self.input[body.range()].to_string();
        self.bump(); // consume closing '"'

        trace!("string of {} bytes at {start}", body.len());
        Ok(Node::StringLiteral {
            value,
            span: Span::new(start, self.pos),
        })
    }

    /// Parses a symbol: everything up to whitespace, `)` or end of input.
    ///
    /// On a `)` this yields the empty symbol and leaves the cursor in place.
    fn parse_symbol(&mut self, start: usize) -> Node {
        while self.peek().is_some_and(|ch| !is_whitespace(ch) && ch != ')') {
            self.bump();
        }

        let span = Span::new(start, self.pos);
        let name = self.input[span.range()].to_string();
        if span.is_empty() {
            trace!("empty symbol at {start}");
        } else {
            trace!("symbol {name:?} at {start}");
        }
        Node::Symbol { name, span }
    }
}

/// Only space, tab and newline separate tokens.
const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}
