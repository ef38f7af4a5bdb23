//! Pretty-printer for YALisp trees.
//!
//! Turns a [`Node`] back into source text. Lists that fit within the
//! configured width stay on one line; longer ones keep their head on the
//! opening line and put each argument on its own indented line:
//!
//! ```text
//! (concat
//!   "a long string"
//!   (concat "b" "c"))
//! ```
//!
//! Parsing the output yields a tree equal to the input apart from spans.

use crate::ast::Node;

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Indentation added per nesting level
    pub indent: String,
    /// Line width at which lists are broken
    pub width: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            width: 80,
        }
    }
}

/// Pretty-printer for YALisp trees.
#[derive(Debug, Clone, Default)]
pub struct PrettyPrinter {
    config: PrettyConfig,
}

impl PrettyPrinter {
    /// Creates a printer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PrettyConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders `node` as source text.
    ///
    /// ```
    /// use yalisp_syntax::parser::parse;
    /// use yalisp_syntax::pretty::PrettyPrinter;
    ///
    /// let node = parse("( +   1\t2 )", &mut 0).unwrap();
    /// assert_eq!(PrettyPrinter::new().print(&node), "(+ 1 2)");
    /// ```
    #[must_use]
    pub fn print(&self, node: &Node) -> String {
        let mut out = String::new();
        self.print_at(node, 0, &mut out);
        out
    }

    fn print_at(&self, node: &Node, level: usize, out: &mut String) {
        let compact = node.to_string();
        let column = self.config.indent.chars().count() * level;

        let items = match node {
            Node::List { items, .. }
                if items.len() > 1 && column + compact.chars().count() > self.config.width =>
            {
                items
            }
            _ => {
                out.push_str(&compact);
                return;
            }
        };

        out.push('(');
        self.print_at(&items[0], level, out);
        for item in &items[1..] {
            out.push('\n');
            out.push_str(&self.config.indent.repeat(level + 1));
            self.print_at(item, level + 1, out);
        }
        out.push(')');
    }
}
