//! `yalisp`: the YALisp shell.
//!
//! With no arguments this starts an interactive session on stdin. `-e`
//! evaluates a single expression and exits.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use yalisp_interpreter::repl::DEFAULT_PROMPT;
use yalisp_interpreter::{Repl, ReplConfig};
use yalisp_log::{Level, error};
use yalisp_syntax::Emitter;

#[derive(Parser, Debug)]
#[command(name = "yalisp", version, about = "Yet Another Lisp: an interactive shell for integer and string expressions", long_about = None)]
struct Cli {
    /// Do not print the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Text printed before each line is read.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Least severe log level written to stderr (error, warn, info, debug, trace).
    #[arg(long, env = "YALISP_LOG", default_value = "warn")]
    log_level: Level,

    /// Disable ANSI colors in logs and diagnostics.
    #[arg(long)]
    no_color: bool,

    /// Render source-highlighted diagnostics for errors on stderr.
    #[arg(long)]
    diagnostics: bool,

    /// Print the pretty-printed tree of each line before its value.
    #[arg(long)]
    print_ast: bool,

    /// Evaluate one expression, print the result and exit.
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,
}

impl Cli {
    fn repl_config(&self) -> ReplConfig {
        ReplConfig {
            prompt: self.prompt.clone(),
            banner: !self.quiet,
            print_ast: self.print_ast,
            diagnostics: self.diagnostics,
            use_colors: !self.no_color,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    yalisp_log::set_level(cli.log_level);
    yalisp_log::set_colors(!cli.no_color);

    let repl = Repl::new(cli.repl_config());
    let result = match &cli.eval {
        Some(expr) => eval_once(&repl, expr),
        None => interactive(&repl),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the session on the standard streams.
fn interactive(repl: &Repl) -> io::Result<ExitCode> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match repl.run(stdin, &mut stdout, &mut stderr) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(yalisp_interpreter::ReplError::Io(err)) => Err(err),
    }
}

/// Evaluates `expr` and reports the outcome the same way the session does.
fn eval_once(repl: &Repl, expr: &str) -> io::Result<ExitCode> {
    let outcome = repl.process_line(expr);
    let config = repl.config();

    let mut stdout = io::stdout().lock();
    if config.print_ast {
        if let Some(ast) = &outcome.ast {
            writeln!(stdout, "{}", yalisp_syntax::PrettyPrinter::new().print(ast))?;
        }
    }
    writeln!(stdout, "{}", outcome.render())?;

    match &outcome.result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            if config.diagnostics {
                let mut stderr = io::stderr().lock();
                Emitter::new(config.use_colors).emit(&mut stderr, &err.to_diagnostic(), expr)?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
