//! The fixed set of operators a list can call.
//!
//! Operator names are plain symbols to the parser. [`Builtin::from_name`]
//! is the only place they are recognized.

use crate::value::ValueKind;
use std::fmt;

/// A built-in operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `+`: sum of integers, `0` with no arguments
    Add,
    /// `-`: first integer minus the rest, needs at least one argument
    Sub,
    /// `concat`: strings joined with no separator, `""` with no arguments
    Concat,
}

impl Builtin {
    /// Every built-in, in the order they are listed to users.
    pub const ALL: [Builtin; 3] = [Builtin::Add, Builtin::Sub, Builtin::Concat];

    /// Looks up an operator by its exact symbol text.
    ///
    /// ```
    /// use yalisp_interpreter::Builtin;
    ///
    /// assert_eq!(Builtin::from_name("concat"), Some(Builtin::Concat));
    /// assert_eq!(Builtin::from_name("+1"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "concat" => Some(Self::Concat),
            _ => None,
        }
    }

    /// The symbol that names this operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Concat => "concat",
        }
    }

    /// Fewest arguments the operator accepts.
    #[must_use]
    pub const fn min_args(self) -> usize {
        match self {
            Self::Sub => 1,
            Self::Add | Self::Concat => 0,
        }
    }

    /// The kind every argument must evaluate to.
    #[must_use]
    pub const fn operand_kind(self) -> ValueKind {
        match self {
            Self::Add | Self::Sub => ValueKind::Int,
            Self::Concat => ValueKind::Str,
        }
    }

    /// Comma-separated list of all operator names.
    #[must_use]
    pub fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
