use std::io;
use yalisp_syntax::diagnostic::{DiagnosticBuilder, DiagnosticLevel, Emitter};
use yalisp_syntax::parse;
use yalisp_syntax::span::Span;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    println!("=== WITH COLORS ===\n");
    let source = "(concat \"a\"\n  (+ 1 2))";
    let diagnostic = DiagnosticBuilder::new(
        DiagnosticLevel::Error,
        "Non-string argument to concat",
        Span::new(14, 21),
    )
    .suggest("`concat` takes string arguments, this one is a integer")
    .note("call starts here", Span::point(0))
    .build();
    Emitter::new(true).emit(&mut stdout, &diagnostic, source)?;

    println!("\n=== WITHOUT COLORS ===\n");
    Emitter::new(false).emit(&mut stdout, &diagnostic, source)?;

    println!("\n=== PARSE ERRORS ===\n");
    for source in ["(+ 1 (- 2", "(concat \"abc", "   "] {
        if let Err(err) = parse(source, &mut 0) {
            println!("Error: {err}");
            Emitter::new(true).emit(&mut stdout, &err.to_diagnostic(), source)?;
            println!();
        }
    }

    Ok(())
}
