//! Read-eval-print session.
//!
//! A [`Repl`] reads one line at a time, parses the first expression on it,
//! evaluates that expression, and prints either the value or
//! `Error: <message>`. Text after the first expression is ignored. The loop
//! ends at end of input.

use crate::error::Error;
use crate::eval::eval;
use crate::value::Value;
use std::fmt;
use std::io::{self, BufRead, Write};
use yalisp_log::{error, info, warn};
use yalisp_syntax::ast::Node;
use yalisp_syntax::diagnostic::Emitter;
use yalisp_syntax::parser::Parser;
use yalisp_syntax::pretty::PrettyPrinter;

/// Greeting printed once when an interactive session starts.
pub const BANNER: &str =
    "Welcome to Yet Another Lisp (YALisp)!\nType in lisp expressions, and I'll execute them :3";

/// Default prompt, printed before each line is read.
pub const DEFAULT_PROMPT: &str = "(yalisp) > ";

/// Session settings.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Printed before each line, without a newline
    pub prompt: String,
    /// Print [`BANNER`] when the session starts
    pub banner: bool,
    /// Print the pretty-printed tree of each line before its value
    pub print_ast: bool,
    /// Render a source-highlighted diagnostic for each error
    pub diagnostics: bool,
    /// Use ANSI colors in diagnostics
    pub use_colors: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            print_ast: false,
            diagnostics: false,
            use_colors: true,
        }
    }
}

/// What became of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The parsed tree, if parsing succeeded
    pub ast: Option<Node>,
    /// The value, or the first error hit while parsing or evaluating
    pub result: Result<Value, Error>,
}

impl Outcome {
    /// The line the shell prints for this outcome.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.result {
            Ok(value) => value.to_string(),
            Err(err) => format!("Error: {err}"),
        }
    }

    /// Returns true if the line failed to parse or evaluate.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.result.is_err()
    }
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read
    pub lines: usize,
    /// Lines that ended in an error
    pub errors: usize,
}

/// Failure of the session itself, as opposed to a bad line of input.
#[derive(Debug)]
pub enum ReplError {
    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// An interactive YALisp session.
#[derive(Debug, Clone, Default)]
pub struct Repl {
    config: ReplConfig,
    printer: PrettyPrinter,
}

impl Repl {
    /// Creates a session with the given settings.
    #[must_use]
    pub fn new(config: ReplConfig) -> Self {
        Self {
            config,
            printer: PrettyPrinter::new(),
        }
    }

    /// The session settings.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Parses and evaluates the first expression in `line`.
    ///
    /// ```
    /// use yalisp_interpreter::{Repl, ReplConfig};
    ///
    /// let repl = Repl::new(ReplConfig::default());
    /// assert_eq!(repl.process_line("(- 10 1 2)").render(), "7");
    /// assert_eq!(repl.process_line("()").render(), "Error: Cannot evaluate an empty list");
    /// ```
    #[must_use]
    pub fn process_line(&self, line: &str) -> Outcome {
        let mut parser = Parser::new(line);
        let node = match parser.parse_expr() {
            Ok(node) => node,
            Err(err) => {
                return Outcome {
                    ast: None,
                    result: Err(err.into()),
                };
            }
        };

        if !parser.is_at_end() {
            warn!("ignoring text after byte {}", parser.position());
        }

        let result = eval(&node).map_err(Error::from);
        Outcome {
            ast: Some(node),
            result,
        }
    }

    /// Runs the session until `input` is exhausted.
    ///
    /// Values and `Error:` lines go to `out`. Rendered diagnostics, when
    /// enabled, go to `diag`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] if reading or writing fails. Bad input is
    /// never an error here; it is reported on `out` and the loop continues.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, diag: &mut E) -> Result<SessionStats, ReplError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        info!("session started");
        let result = self.run_loop(&mut input, out, diag);
        match &result {
            Ok(stats) => info!("session ended after {} lines, {} errors", stats.lines, stats.errors),
            Err(err) => error!("session aborted: {err}"),
        }
        result
    }

    fn run_loop<R, W, E>(&self, input: &mut R, out: &mut W, diag: &mut E) -> Result<SessionStats, ReplError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut stats = SessionStats::default();

        if self.config.banner {
            writeln!(out, "{BANNER}")?;
        }

        let mut buf = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                break;
            }
            let line = strip_line_ending(&buf);
            stats.lines += 1;

            let outcome = self.process_line(line);
            if outcome.is_error() {
                stats.errors += 1;
            }

            if self.config.print_ast {
                if let Some(ast) = &outcome.ast {
                    writeln!(out, "{}", self.printer.print(ast))?;
                }
            }

            writeln!(out, "{}", outcome.render())?;

            if self.config.diagnostics {
                if let Err(err) = &outcome.result {
                    Emitter::new(self.config.use_colors).emit(diag, &err.to_diagnostic(), line)?;
                    diag.flush()?;
                }
            }
        }

        Ok(stats)
    }
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use yalisp_syntax::error::ParseError;

    fn quiet() -> ReplConfig {
        ReplConfig {
            prompt: String::new(),
            banner: false,
            ..ReplConfig::default()
        }
    }

    fn session(config: ReplConfig, input: &str) -> (String, String, SessionStats) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let stats = Repl::new(config)
            .run(input.as_bytes(), &mut out, &mut diag)
            .expect("in-memory session should not fail");
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            stats,
        )
    }

    #[test]
    fn test_process_line_value() {
        let repl = Repl::default();
        let outcome = repl.process_line("(concat \"a\" \"b\")");
        assert_eq!(outcome.result, Ok(Value::from("ab")));
        assert!(outcome.ast.is_some());
        assert_eq!(outcome.render(), "\"ab\"");
    }

    #[test]
    fn test_process_line_parse_error() {
        let outcome = Repl::default().process_line("(+ 1");
        assert!(outcome.ast.is_none());
        assert!(matches!(
            outcome.result,
            Err(Error::Parse(ParseError::UnmatchedOpenParen { .. }))
        ));
        assert_eq!(outcome.render(), "Error: Unmatched '(' in input");
    }

    #[test]
    fn test_process_line_eval_error_keeps_tree() {
        let outcome = Repl::default().process_line("(foo 1)");
        assert!(outcome.ast.is_some());
        assert!(matches!(
            outcome.result,
            Err(Error::Eval(EvalError::UnknownOperator { .. }))
        ));
        assert_eq!(outcome.render(), "Error: Unknown operator");
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let outcome = Repl::default().process_line("(+ 1 2) garbage (");
        assert_eq!(outcome.result, Ok(Value::Int(3)));
    }

    #[test]
    fn test_blank_line_is_end_of_input() {
        assert_eq!(
            Repl::default().process_line("").render(),
            "Error: Unexpected end of input"
        );
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n"), "abc");
        assert_eq!(strip_line_ending("abc\r\n"), "abc");
        assert_eq!(strip_line_ending("abc"), "abc");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn test_run_prints_banner_and_prompts() {
        let (out, diag, stats) = session(ReplConfig::default(), "(+ 1 2)\n");
        assert_eq!(
            out,
            format!("{BANNER}\n(yalisp) > 3\n(yalisp) > ")
        );
        assert!(diag.is_empty());
        assert_eq!(stats, SessionStats { lines: 1, errors: 0 });
    }

    #[test]
    fn test_run_continues_after_errors() {
        let (out, _, stats) = session(quiet(), "x\r\n(- 5)\n(concat 1)\n\"s\"");
        assert_eq!(
            out,
            "Error: Cannot evaluate a standalone symbol\n5\nError: Non-string argument to concat\n\"s\"\n"
        );
        assert_eq!(stats, SessionStats { lines: 4, errors: 2 });
    }

    #[test]
    fn test_run_print_ast() {
        let config = ReplConfig {
            print_ast: true,
            ..quiet()
        };
        let (out, _, _) = session(config, "(  +  1   2 )\n(\n");
        assert_eq!(out, "(+ 1 2)\n3\nError: Unmatched '(' in input\n");
    }

    #[test]
    fn test_run_diagnostics_go_to_separate_writer() {
        let config = ReplConfig {
            diagnostics: true,
            use_colors: false,
            ..quiet()
        };
        let (out, diag, _) = session(config, "(+ 1 \"x\")\n");
        assert_eq!(out, "Error: Non-integer argument to +\n");
        assert!(diag.starts_with("1:6: error: Non-integer argument to +\n"));
        assert!(diag.contains("   1 | (+ 1 \"x\")\n"));
        assert!(diag.contains("     |      ^^^\n"));
    }

    #[test]
    fn test_run_empty_input() {
        let (out, _, stats) = session(quiet(), "");
        assert!(out.is_empty());
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_run_reports_write_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = Repl::default().run("1\n".as_bytes(), &mut Broken, &mut Vec::new());
        assert!(matches!(result, Err(ReplError::Io(ref err)) if err.kind() == io::ErrorKind::BrokenPipe));
    }
}
