//! Checking pipeline stages.
//!
//! Each stage renders its failure as a miette report on stderr and returns a
//! short summary error.

use anyhow::Result;
use dwislpy_core::Span;
use dwislpy_lexer::{Token, tokenize};
use dwislpy_parser::{Program, parse};
use miette::NamedSource;

/// Runs lexical analysis on source code.
///
/// # Errors
/// Returns an error if lexical analysis fails.
pub fn lex(source: &str, name: &str) -> Result<Vec<(Token, Span)>> {
    let tokens = tokenize(source).map_err(|e| {
        report(e, source, name);
        anyhow::anyhow!("Lexical analysis failed")
    })?;
    tracing::debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Runs parsing on tokens to produce an AST.
///
/// # Errors
/// Returns an error if parsing fails.
pub fn parse_tokens(tokens: &[(Token, Span)], source: &str, name: &str) -> Result<Program> {
    let program = parse(tokens).map_err(|e| {
        report(e, source, name);
        anyhow::anyhow!("Parsing failed")
    })?;
    tracing::debug!(
        definitions = program.definitions.len(),
        statements = program.main.statements.len(),
        "parsed program"
    );
    Ok(program)
}

/// Runs semantic analysis on the AST.
///
/// # Errors
/// Returns an error if semantic analysis fails.
pub fn analyze(program: &Program, source: &str, name: &str) -> Result<()> {
    dwislpy_semantic::analyze(program).map_err(|e| {
        report(e, source, name);
        anyhow::anyhow!("Semantic analysis failed")
    })
}

/// Runs every stage on `source`; `name` labels the source in diagnostics.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_pipeline(source: &str, name: &str) -> Result<()> {
    let tokens = lex(source, name)?;
    let ast = parse_tokens(&tokens, source, name)?;
    analyze(&ast, source, name)
}

fn report(error: dwislpy_core::Error, source: &str, name: &str) {
    let report = miette::Report::new(error)
        .with_source_code(NamedSource::new(name, source.to_string()));
    eprintln!("{report:?}");
}
