//! REPL session tests: whole transcripts through in-memory streams.

use yalisp_interpreter::repl::BANNER;
use yalisp_interpreter::{Repl, ReplConfig, SessionStats};

fn run(config: ReplConfig, input: &str) -> (String, String, SessionStats) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let stats = Repl::new(config)
        .run(input.as_bytes(), &mut out, &mut diag)
        .unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
        stats,
    )
}

#[test]
fn test_default_session_transcript() {
    let input = "(+ 1 2 3)\n(concat \"foo\" \"bar\")\n(foo 1)\n\n(- 10 1 2)\n";
    let (out, diag, stats) = run(ReplConfig::default(), input);

    let expected = format!(
        "{BANNER}\n\
         (yalisp) > 6\n\
         (yalisp) > \"foobar\"\n\
         (yalisp) > Error: Unknown operator\n\
         (yalisp) > Error: Unexpected end of input\n\
         (yalisp) > 7\n\
         (yalisp) > "
    );
    assert_eq!(out, expected);
    assert!(diag.is_empty());
    assert_eq!(stats, SessionStats { lines: 5, errors: 2 });
}

#[test]
fn test_custom_prompt_without_banner() {
    let config = ReplConfig {
        prompt: "> ".to_string(),
        banner: false,
        ..ReplConfig::default()
    };
    let (out, _, _) = run(config, "\"hi\"");
    assert_eq!(out, "> \"hi\"\n> ");
}

#[test]
fn test_windows_line_endings() {
    let config = ReplConfig {
        prompt: String::new(),
        banner: false,
        ..ReplConfig::default()
    };
    let (out, _, stats) = run(config, "(+ 1 2)\r\n(concat \"a\" \"b\")\r\n");
    assert_eq!(out, "3\n\"ab\"\n");
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_diagnostics_follow_each_error() {
    let config = ReplConfig {
        prompt: String::new(),
        banner: false,
        diagnostics: true,
        use_colors: false,
        ..ReplConfig::default()
    };
    let (out, diag, stats) = run(config, "(1 2)\n(+ 1 2)\n(concat \"a\n");

    assert_eq!(
        out,
        "Error: First element of a list must be a symbol (operator)\n\
         3\n\
         Error: Unterminated string literal in input\n"
    );
    assert_eq!(stats, SessionStats { lines: 3, errors: 2 });

    let headers: Vec<&str> = diag
        .lines()
        .filter(|line| line.contains(": error: "))
        .collect();
    assert_eq!(
        headers,
        [
            "1:2: error: First element of a list must be a symbol (operator)",
            "1:9: error: Unterminated string literal in input",
        ]
    );
}
