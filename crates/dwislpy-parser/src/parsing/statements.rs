//! Statement parsing.

use super::parser::Parser;
use crate::ast::{Expression, Statement};
use dwislpy_core::{Error, Result};
use dwislpy_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a statement, compound or simple.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        match self.peek().0.kind {
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Def => Err(Error::Parser(
                "Definitions are only allowed at the top level".to_string(),
                self.current_span(),
            )),
            _ => self.parse_simple_statement(),
        }
    }

    /// Parses a single-line statement and its terminating newline.
    pub(crate) fn parse_simple_statement(&mut self) -> Result<Statement> {
        let statement = match self.peek().0.kind {
            TokenKind::Pass => {
                let span = self.expect(&TokenKind::Pass)?;
                Statement::Pass { span }
            }
            TokenKind::Print => self.parse_print_statement()?,
            TokenKind::Return => self.parse_return_statement()?,
            TokenKind::Identifier => self.parse_identifier_statement()?,
            _ => return Err(self.unexpected("statement")),
        };

        self.expect(&TokenKind::Newline)?;
        Ok(statement)
    }

    /// Parses `if cond: suite [else: suite]`.
    fn parse_if_statement(&mut self) -> Result<Statement> {
        let start_span = self.expect(&TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Colon)?;
        let then_block = self.parse_block()?;

        let else_block = if self.match_token(&TokenKind::Else) {
            self.expect(&TokenKind::Colon)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        let end_span = else_block.as_ref().unwrap_or(&then_block).span;

        Ok(Statement::If {
            condition,
            then_block,
            else_block,
            span: start_span.merge(end_span),
        })
    }

    /// Parses `while cond: suite`.
    fn parse_while_statement(&mut self) -> Result<Statement> {
        let start_span = self.expect(&TokenKind::While)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Colon)?;
        let body = self.parse_block()?;
        let end_span = body.span;

        Ok(Statement::While {
            condition,
            body,
            span: start_span.merge(end_span),
        })
    }

    /// Parses `print(expr)`.
    fn parse_print_statement(&mut self) -> Result<Statement> {
        let start_span = self.expect(&TokenKind::Print)?;
        self.expect(&TokenKind::LeftParen)?;
        let value = self.parse_expression()?;
        let end_span = self.expect(&TokenKind::RightParen)?;

        Ok(Statement::Print {
            value,
            span: start_span.merge(end_span),
        })
    }

    /// Parses `return expr` or a bare `return`.
    fn parse_return_statement(&mut self) -> Result<Statement> {
        let start_span = self.expect(&TokenKind::Return)?;

        if self.check(&TokenKind::Newline) {
            return Ok(Statement::ProcedureReturn { span: start_span });
        }

        let value = self.parse_expression()?;
        let span = start_span.merge(value.span());
        Ok(Statement::Return { value, span })
    }

    /// Parses a statement that starts with an identifier: a declaration,
    /// an assignment, or a procedure call.
    fn parse_identifier_statement(&mut self) -> Result<Statement> {
        let (name, start_span) = self.expect_identifier()?;

        match self.peek().0.kind {
            TokenKind::Colon => {
                self.advance();
                let var_type = self.parse_type()?;
                self.expect(&TokenKind::Equal)?;
                let initializer = self.parse_expression()?;
                let span = start_span.merge(initializer.span());

                Ok(Statement::Declaration {
                    name,
                    var_type,
                    initializer,
                    span,
                })
            }
            TokenKind::Equal => {
                self.advance();
                let value = self.parse_expression()?;
                let span = start_span.merge(value.span());

                Ok(Statement::Assignment { name, value, span })
            }
            TokenKind::LeftParen => {
                self.advance();
                let arguments = self.parse_argument_list()?;
                let end_span = self.expect(&TokenKind::RightParen)?;

                Ok(Statement::ProcedureCall {
                    callee: name,
                    arguments,
                    span: start_span.merge(end_span),
                })
            }
            _ => Err(self.unexpected("':', '=' or '(' after identifier")),
        }
    }

    /// Parses comma-separated call arguments up to (not including) `)`.
    pub(crate) fn parse_argument_list(&mut self) -> Result<Vec<Expression>> {
        let mut arguments = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        Ok(arguments)
    }
}
