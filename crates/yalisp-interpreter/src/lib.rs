//! YALisp interpreter: evaluation and the REPL session.
//!
//! This crate provides:
//! - [`Value`] - integers and strings produced by evaluation
//! - [`Builtin`] - the closed set of operators (`+`, `-`, `concat`)
//! - [`eval`] - direct evaluation of a parsed [`Node`](yalisp_syntax::Node)
//! - [`Repl`] - the read-eval-print loop used by the `yalisp` binary
//!
//! # Examples
//!
//! ```
//! use yalisp_interpreter::{run_line, Value};
//!
//! assert_eq!(run_line("(+ 1 2 3)"), Ok(Value::Int(6)));
//! assert_eq!(
//!     run_line("(concat 1)").unwrap_err().to_string(),
//!     "Non-string argument to concat"
//! );
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod error;
pub mod eval;
pub mod repl;
pub mod value;

pub use builtin::Builtin;
pub use error::{Error, EvalError, EvalResult};
pub use eval::eval;
pub use repl::{Outcome, Repl, ReplConfig, ReplError, SessionStats};
pub use value::{Value, ValueKind};

/// Parses the first expression in `text` and evaluates it.
///
/// # Errors
///
/// Returns the parse error or evaluation error, whichever comes first.
pub fn run_line(text: &str) -> Result<Value, Error> {
    let node = yalisp_syntax::parse(text, &mut 0)?;
    Ok(eval(&node)?)
}
