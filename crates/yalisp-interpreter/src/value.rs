//! Runtime values.
//!
//! Values only live for one evaluation: they are produced by [`eval`],
//! printed or propagated by the caller, then dropped. There is no list,
//! boolean or symbol value.
//!
//! [`eval`]: crate::eval::eval

use std::fmt;

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer
    Int(i64),
    /// An owned string
    Str(String),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Int`]
    Int,
    /// [`Value::Str`]
    Str,
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Str(_) => ValueKind::Str,
        }
    }
}

/// How the shell prints a value: integers in signed decimal, strings inside
/// double quotes with no escaping.
///
/// ```
/// use yalisp_interpreter::Value;
///
/// assert_eq!(Value::Int(-3).to_string(), "-3");
/// assert_eq!(Value::Str("hi".into()).to_string(), "\"hi\"");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Str => write!(f, "string"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
