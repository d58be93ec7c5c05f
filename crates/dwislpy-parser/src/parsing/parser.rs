//! Core parser structure and helper methods.

use crate::ast::{Block, Program};
use dwislpy_core::{Error, Result, Span};
use dwislpy_lexer::{Token, TokenKind};

/// Parser for DWISLPY source code.
///
/// Expects the token stream produced by `dwislpy_lexer::tokenize`, which is
/// terminated by an `Eof` token.
pub struct Parser<'a> {
    tokens: &'a [(Token, Span)],
    current: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parses a complete program.
    ///
    /// Definitions are collected separately; every other top-level statement
    /// becomes part of the main script, in source order.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut definitions = Vec::new();
        let mut statements = Vec::new();
        let start = self.current_span();

        while self.match_token(&TokenKind::Newline) {}

        while !self.is_at_end() {
            if self.check(&TokenKind::Def) {
                definitions.push(self.parse_definition()?);
            } else {
                statements.push(self.parse_statement()?);
            }
        }

        let end = self.current_span();
        let main_span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => end,
        };

        Ok(Program {
            definitions,
            main: Block {
                statements,
                span: main_span,
            },
            span: start.merge(end),
        })
    }

    /// Parses an indented suite: `NEWLINE INDENT statement+ DEDENT`.
    ///
    /// A suite may also be a single simple statement on the header line,
    /// as in `if done: return 0`.
    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        if !self.check(&TokenKind::Newline) {
            let statement = self.parse_simple_statement()?;
            let span = statement.span();
            return Ok(Block {
                statements: vec![statement],
                span,
            });
        }

        self.expect(&TokenKind::Newline)?;
        self.expect(&TokenKind::Indent)?;

        let mut statements = Vec::new();
        while !self.check(&TokenKind::Dedent) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.expect(&TokenKind::Dedent)?;

        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => self.previous_span(),
        };

        Ok(Block { statements, span })
    }

    // ==================== Helper Methods ====================

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().0.kind == TokenKind::Eof
    }

    pub(crate) fn peek(&self) -> &(Token, Span) {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.current.min(last)]
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().0.kind == kind
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_tokens(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        for kind in kinds {
            if self.check(kind) {
                let matched = kind.clone();
                self.advance();
                return Some(matched);
            }
        }
        None
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(&format!("'{kind}'")))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<(String, Span)> {
        if self.check(&TokenKind::Identifier) {
            let (token, span) = self.peek().clone();
            self.advance();
            Ok((token.text, span))
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Builds an "Expected X, found Y" error at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> Error {
        let (token, span) = self.peek();
        let found = if token.text.is_empty() {
            token.kind.to_string()
        } else {
            format!("'{}'", token.text)
        };
        Error::Parser(format!("Expected {expected}, found {found}"), *span)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.peek().1
    }

    pub(crate) fn previous_span(&self) -> Span {
        if self.current > 0 {
            self.tokens[self.current - 1].1
        } else {
            self.current_span()
        }
    }
}
