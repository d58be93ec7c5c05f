//! Parser for DWISLPY.
//!
//! This crate provides parsing of token streams into Abstract Syntax Trees (ASTs).

pub mod ast;
mod parsing;

pub use ast::{
    BinaryOperator, Block, Definition, Expression, Literal, Parameter, Program, Statement,
};
pub use parsing::Parser;

use dwislpy_core::{Error, Result, Span};
use dwislpy_lexer::Token;

/// Parses a slice of tokens into a DWISLPY program AST.
///
/// # Arguments
/// * `tokens` - The token stream to parse, as produced by `dwislpy_lexer::tokenize`
///
/// # Returns
/// A parsed program AST
///
/// # Errors
/// Returns an error if the token stream contains syntax errors
///
/// # Examples
/// ```
/// use dwislpy_lexer::tokenize;
/// use dwislpy_parser::parse;
///
/// let source = "def one() -> int:\n    return 1\nprint(one())\n";
/// let tokens = tokenize(source).unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.definitions.len(), 1);
/// assert_eq!(program.main.statements.len(), 1);
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program> {
    if tokens.is_empty() {
        return Err(Error::Parser(
            "Empty token stream".to_string(),
            Span::dummy(),
        ));
    }
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
