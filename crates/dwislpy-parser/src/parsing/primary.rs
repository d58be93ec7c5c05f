//! Primary expression parsing (literals, variables, calls, built-ins).

use super::parser::Parser;
use crate::ast::{Expression, Literal};
use dwislpy_core::{Error, Result, Span};
use dwislpy_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a primary expression.
    pub(crate) fn parse_primary(&mut self) -> Result<Expression> {
        let span = self.current_span();

        match self.peek().0.kind {
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::String => self.parse_string_literal(),
            TokenKind::True => Ok(self.literal(Literal::Bool(true), span)),
            TokenKind::False => Ok(self.literal(Literal::Bool(false), span)),
            TokenKind::None => Ok(self.literal(Literal::None, span)),

            TokenKind::Identifier => {
                let (name, name_span) = self.expect_identifier()?;
                if !self.match_token(&TokenKind::LeftParen) {
                    return Ok(Expression::Variable {
                        name,
                        span: name_span,
                    });
                }

                let arguments = self.parse_argument_list()?;
                let end_span = self.expect(&TokenKind::RightParen)?;
                Ok(Expression::Call {
                    callee: name,
                    arguments,
                    span: name_span.merge(end_span),
                })
            }

            TokenKind::Input => {
                let (prompt, span) = self.parse_builtin_argument(&TokenKind::Input)?;
                Ok(Expression::Input { prompt, span })
            }
            TokenKind::Int => {
                let (operand, span) = self.parse_builtin_argument(&TokenKind::Int)?;
                Ok(Expression::IntConvert { operand, span })
            }
            TokenKind::Str => {
                let (operand, span) = self.parse_builtin_argument(&TokenKind::Str)?;
                Ok(Expression::StrConvert { operand, span })
            }

            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Consumes a single-token literal.
    fn literal(&mut self, value: Literal, span: Span) -> Expression {
        self.advance();
        Expression::Literal { value, span }
    }

    /// Parses `keyword(expr)` for the built-ins `input`, `int` and `str`.
    fn parse_builtin_argument(&mut self, keyword: &TokenKind) -> Result<(Box<Expression>, Span)> {
        let start_span = self.expect(keyword)?;
        self.expect(&TokenKind::LeftParen)?;
        let argument = self.parse_expression()?;
        let end_span = self.expect(&TokenKind::RightParen)?;
        Ok((Box::new(argument), start_span.merge(end_span)))
    }

    /// Parses an integer literal.
    fn parse_integer_literal(&mut self) -> Result<Expression> {
        let (token, span) = self.peek().clone();
        let value = token
            .text
            .parse::<i64>()
            .map_err(|_| Error::Parser(format!("Invalid integer: {}", token.text), span))?;
        self.advance();
        Ok(Expression::Literal {
            value: Literal::Int(value),
            span,
        })
    }

    /// Parses a string literal, resolving escape sequences.
    fn parse_string_literal(&mut self) -> Result<Expression> {
        let (token, span) = self.peek().clone();
        let value = unescape(&token.text, span)?;
        self.advance();
        Ok(Expression::Literal {
            value: Literal::Str(value),
            span,
        })
    }
}

/// Strips the quotes from a string token and resolves its escapes.
fn unescape(text: &str, span: Span) -> Result<String> {
    let inner = &text[1..text.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('\\') => value.push('\\'),
            Some('"') => value.push('"'),
            Some('\'') => value.push('\''),
            Some(other) => {
                return Err(Error::Parser(
                    format!("Unknown escape sequence '\\{other}'"),
                    span,
                ));
            }
            None => {
                return Err(Error::Parser(
                    "Unterminated escape sequence".to_string(),
                    span,
                ));
            }
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::unescape;
    use dwislpy_core::Span;

    #[test]
    fn test_unescape() {
        let value = unescape(r#""a\tb\n\"c\"""#, Span::dummy()).unwrap();
        assert_eq!(value, "a\tb\n\"c\"");
    }

    #[test]
    fn test_unescape_single_quoted() {
        let value = unescape(r"'it\'s'", Span::dummy()).unwrap();
        assert_eq!(value, "it's");
    }

    #[test]
    fn test_unknown_escape_is_rejected() {
        assert!(unescape(r#""\q""#, Span::dummy()).is_err());
    }
}
