//! Semantic analysis for DWISLPY programs.
//!
//! This crate provides type checking, symbol resolution, and definite-return
//! analysis for DWISLPY source code. It operates on the AST produced by the
//! parser and stops at the first violation it finds.
//!
//! Checking runs in two passes: every definition's signature is registered
//! first, so bodies may call definitions that appear later in the source;
//! then each body is checked, followed by the main script.

mod checker;
mod definitions;
mod flow;
mod symbol_table;

pub use checker::{ReturnContext, TypeChecker};
pub use definitions::{DefinitionTable, Signature};
pub use flow::{FlowConflict, ReturnFlow};
pub use symbol_table::{Scope, ScopeId, Symbol, SymbolTable};

use dwislpy_core::Result;
use dwislpy_parser::ast::Program;

/// Performs semantic analysis on a DWISLPY program.
///
/// # Errors
/// Returns the first semantic error found:
/// - Type mismatches
/// - Unknown variables or definitions
/// - Duplicate bindings
/// - Definitions that do not return on every path
/// - Returns in the main script
///
/// # Examples
/// ```
/// use dwislpy_lexer::tokenize;
/// use dwislpy_parser::parse;
/// use dwislpy_semantic::analyze;
///
/// let source = "def twice(n: int) -> int:\n    return n + n\nprint(twice(21))\n";
/// let tokens = tokenize(source).unwrap();
/// let program = parse(&tokens).unwrap();
/// assert!(analyze(&program).is_ok());
/// ```
pub fn analyze(program: &Program) -> Result<()> {
    analyze_with_symbols(program).map(|_| ())
}

/// Performs semantic analysis and returns the definition table and the
/// populated symbol table.
///
/// # Errors
/// Same as [`analyze`].
pub fn analyze_with_symbols(program: &Program) -> Result<(DefinitionTable, SymbolTable)> {
    let mut symbols = SymbolTable::new();
    let definitions = DefinitionTable::register(program, &mut symbols)?;
    tracing::debug!(count = definitions.len(), "registered definitions");

    let mut checker = TypeChecker::new(&definitions, symbols);
    checker.check_program(program)?;
    let symbols = checker.into_symbols();

    Ok((definitions, symbols))
}
