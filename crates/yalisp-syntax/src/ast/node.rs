//! Expression nodes.

use crate::span::{Span, Spanned};
use std::fmt;

/// One parsed expression.
///
/// Symbols are not resolved here. `+`, `-` and `concat` are ordinary
/// [`Node::Symbol`]s until the evaluator looks at the head of a list.
///
/// # Examples
///
/// ```
/// use yalisp_syntax::ast::Node;
/// use yalisp_syntax::span::Span;
///
/// let sum = Node::List {
///     items: vec![
///         Node::Symbol { name: "+".to_string(), span: Span::new(1, 2) },
///         Node::IntLiteral { value: 1, span: Span::new(3, 4) },
///     ],
///     span: Span::new(0, 5),
/// };
///
/// assert_eq!(sum.to_string(), "(+ 1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Integer literal: `42`
    IntLiteral {
        /// The value, wrapped to 64 bits if the digit run overflows
        value: i64,
        /// Source location
        span: Span,
    },

    /// Symbol: `+`, `concat`, `foo`
    Symbol {
        /// The exact characters of the token
        name: String,
        /// Source location
        span: Span,
    },

    /// String literal: `"hello"`
    StringLiteral {
        /// Text between the quotes, without escape processing
        value: String,
        /// Source location, including both quotes
        span: Span,
    },

    /// Parenthesized form: `(+ 1 2)`, `()`
    List {
        /// Children in source order
        items: Vec<Node>,
        /// Source location, including both parentheses
        span: Span,
    },
}

impl Node {
    /// Short human name of the variant, used in log messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::IntLiteral { .. } => "integer",
            Self::Symbol { .. } => "symbol",
            Self::StringLiteral { .. } => "string",
            Self::List { .. } => "list",
        }
    }

    /// Returns the name if this node is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the children if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Self::List { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::List { items, .. } => 1 + items.iter().map(Node::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Self::IntLiteral { span, .. }
            | Self::Symbol { span, .. }
            | Self::StringLiteral { span, .. }
            | Self::List { span, .. } => *span,
        }
    }
}

/// Compact single-line source form.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntLiteral { value, .. } => write!(f, "{value}"),
            Self::Symbol { name, .. } => write!(f, "{name}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::List { items, .. } => {
                write!(f, "(")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
