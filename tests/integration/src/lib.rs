//! End-to-end tests for the filterexpr parser.
//!
//! Each `test_*` module drives the public API only. Set `RUST_LOG=filterexpr=trace`
//! to see the lexer and parser events while running them:
//! ```text
//! cargo test -p filterexpr-integration
//! ```

use std::sync::Once;

use anyhow::{Context, Result};
use filterexpr::{Lexer, ParseError, Program, Token, parse};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Parse `input`, attaching the input text to any failure.
pub fn parse_ok(input: &str) -> Result<Program> {
    init_tracing();
    parse(input).with_context(|| format!("failed to parse {input:?}"))
}

/// Parse `input` and return the error it must produce.
pub fn parse_err(input: &str) -> Result<ParseError> {
    init_tracing();
    match parse(input) {
        Ok(program) => anyhow::bail!("expected {input:?} to be rejected, got {program}"),
        Err(e) => Ok(e),
    }
}

/// Tokenize `input` with a fresh lexer.
pub fn tokens(input: &str) -> Result<Vec<Token>> {
    init_tracing();
    Lexer::new(input)
        .tokenize()
        .with_context(|| format!("failed to tokenize {input:?}"))
}

mod test_parse;
mod test_translate;
