//! Definition and parameter parsing.

use super::parser::Parser;
use crate::ast::{Definition, Parameter};
use dwislpy_core::Result;
use dwislpy_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a definition: `def name(params) -> type: suite`.
    pub(crate) fn parse_definition(&mut self) -> Result<Definition> {
        let start_span = self.expect(&TokenKind::Def)?;

        let (name, _) = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let params = self.parse_parameter_list()?;
        self.expect(&TokenKind::RightParen)?;

        self.expect(&TokenKind::Arrow)?;
        let return_type = self.parse_type()?;
        self.expect(&TokenKind::Colon)?;

        let body = self.parse_block()?;
        let end_span = body.span;

        Ok(Definition {
            name,
            params,
            return_type,
            body,
            span: start_span.merge(end_span),
        })
    }

    /// Parses a parameter list.
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>> {
        let mut params = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                let (name, name_span) = self.expect_identifier()?;

                self.expect(&TokenKind::Colon)?;
                let param_type = self.parse_type()?;

                params.push(Parameter {
                    name,
                    param_type,
                    span: name_span.merge(self.previous_span()),
                });

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        Ok(params)
    }
}
