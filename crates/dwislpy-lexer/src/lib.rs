//! Lexical analysis for DWISLPY.
//!
//! Tokenization happens in two steps. `logos` scans the source into raw
//! tokens, then a layout pass turns physical line structure into `Newline`,
//! `Indent` and `Dedent` tokens the parser can treat like braces.

mod layout;
mod token;

pub use token::{Token, TokenKind};

use logos::Logos;
use dwislpy_core::{Error, LineIndex, Result, Span};

/// Tokenizes DWISLPY source code into a vector of tokens.
///
/// The returned stream always ends with a single `Eof` token, preceded by a
/// `Newline` and enough `Dedent`s to close every open block.
///
/// # Errors
/// Returns an error if the source contains invalid tokens or an indentation
/// level that matches no enclosing block.
///
/// # Examples
/// ```
/// use dwislpy_lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("x: int = 42\n").unwrap();
/// assert_eq!(tokens[0].0.kind, TokenKind::Identifier);
/// assert_eq!(tokens.last().unwrap().0.kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>> {
    let index = LineIndex::new(source);
    let raw = scan(source, &index)?;
    layout::insert_layout(raw, &index, source.len())
}

/// Runs the raw scanner without the layout pass.
fn scan(source: &str, index: &LineIndex) -> Result<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = index.span(lexer.span());
        let kind = result.map_err(|_| {
            Error::Lexer(format!("Invalid token '{}'", lexer.slice()), span)
        })?;

        let text = lexer.slice().to_string();
        tokens.push((Token { kind, text }, span));
    }

    Ok(tokens)
}
