//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use dwislpy_core::{Error, ErrorKind, Result};
use dwislpy_lexer::tokenize;
use dwislpy_parser::{ast::Program, parse};
use dwislpy_semantic::analyze;

/// Helper function to compile and analyze DWISLPY source code.
///
/// # Returns
/// - `Ok(())` if compilation and analysis succeed
/// - `Err(dwislpy_core::Error)` if any stage fails
pub fn compile_and_analyze(source: &str) -> Result<()> {
    let program = compile(source)?;
    analyze(&program)
}

/// Helper function to compile source and return the AST.
pub fn compile(source: &str) -> Result<Program> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

/// Helper function to check if source code fails semantic analysis.
pub fn should_fail(source: &str) -> bool {
    matches!(compile_and_analyze(source), Err(Error::Semantic(_)))
}

/// Helper function to check if source code passes semantic analysis.
pub fn should_pass(source: &str) -> bool {
    compile_and_analyze(source).is_ok()
}

/// The kind of the semantic error `source` fails with.
///
/// # Panics
/// Panics if `source` does not parse or passes analysis.
pub fn error_kind(source: &str) -> ErrorKind {
    let program = compile(source).expect("source should parse");
    analyze(&program)
        .expect_err("source should fail semantic analysis")
        .kind()
        .expect("error should be semantic")
}

/// The rendered semantic error `source` fails with.
pub fn error_message(source: &str) -> String {
    let program = compile(source).expect("source should parse");
    analyze(&program)
        .expect_err("source should fail semantic analysis")
        .to_string()
}
