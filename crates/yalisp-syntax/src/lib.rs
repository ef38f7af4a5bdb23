//! YALisp syntax: spans, AST, parser and diagnostics.
//!
//! # Modules
//!
//! - [`span`] - Byte ranges and line/column lookup
//! - [`ast`] - The [`Node`] tree
//! - [`error`] - [`ParseError`]
//! - [`parser`] - Recursive descent [`parse`] and [`Parser`]
//! - [`pretty`] - Rendering trees back to source
//! - [`diagnostic`] - Source-highlighted error reports
//!
//! # Examples
//!
//! ```
//! use yalisp_syntax::{parse, Node};
//!
//! let mut cursor = 0;
//! let node = parse("(concat \"a\" \"b\")", &mut cursor).unwrap();
//!
//! match node {
//!     Node::List { items, .. } => assert_eq!(items.len(), 3),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod parser;
pub mod pretty;
pub mod span;

pub use ast::Node;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticLevel, Emitter};
pub use error::{ParseError, ParseResult};
pub use parser::{Parser, parse};
pub use pretty::{PrettyConfig, PrettyPrinter};
pub use span::{LineCol, Span, Spanned};
