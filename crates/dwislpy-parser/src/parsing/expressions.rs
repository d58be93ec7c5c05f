//! Expression parsing with operator precedence.

use super::parser::Parser;
use crate::ast::{BinaryOperator, Expression, Literal};
use dwislpy_core::Result;
use dwislpy_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_or()
    }

    /// Parses logical OR expression.
    fn parse_or(&mut self) -> Result<Expression> {
        let mut expr = self.parse_and()?;

        while self.match_token(&TokenKind::Or) {
            let right = self.parse_and()?;
            expr = binary(expr, BinaryOperator::Or, right);
        }

        Ok(expr)
    }

    /// Parses logical AND expression.
    fn parse_and(&mut self) -> Result<Expression> {
        let mut expr = self.parse_not()?;

        while self.match_token(&TokenKind::And) {
            let right = self.parse_not()?;
            expr = binary(expr, BinaryOperator::And, right);
        }

        Ok(expr)
    }

    /// Parses logical negation: `not expr`.
    fn parse_not(&mut self) -> Result<Expression> {
        if self.check(&TokenKind::Not) {
            let start_span = self.expect(&TokenKind::Not)?;
            let operand = self.parse_not()?;
            let span = start_span.merge(operand.span());
            return Ok(Expression::Not {
                operand: Box::new(operand),
                span,
            });
        }

        self.parse_comparison()
    }

    /// Parses comparison expression (<, <=, ==).
    fn parse_comparison(&mut self) -> Result<Expression> {
        let mut expr = self.parse_term()?;

        while let Some(op_kind) = self.match_tokens(&[
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::EqualEqual,
        ]) {
            let operator = match op_kind {
                TokenKind::Less => BinaryOperator::Less,
                TokenKind::LessEqual => BinaryOperator::LessEqual,
                TokenKind::EqualEqual => BinaryOperator::Equal,
                _ => unreachable!(),
            };
            let right = self.parse_term()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses addition/subtraction expression.
    fn parse_term(&mut self) -> Result<Expression> {
        let mut expr = self.parse_factor()?;

        while let Some(op_kind) = self.match_tokens(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = match op_kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                _ => unreachable!(),
            };
            let right = self.parse_factor()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses multiplication/floor-division/modulo expression.
    fn parse_factor(&mut self) -> Result<Expression> {
        let mut expr = self.parse_unary()?;

        while let Some(op_kind) =
            self.match_tokens(&[TokenKind::Star, TokenKind::SlashSlash, TokenKind::Percent])
        {
            let operator = match op_kind {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::SlashSlash => BinaryOperator::IntDivide,
                TokenKind::Percent => BinaryOperator::Modulo,
                _ => unreachable!(),
            };
            let right = self.parse_unary()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses prefix minus.
    ///
    /// `-e` becomes `0 - e`; a negated integer literal is folded into a
    /// negative literal.
    fn parse_unary(&mut self) -> Result<Expression> {
        if self.check(&TokenKind::Minus) {
            let start_span = self.expect(&TokenKind::Minus)?;
            let operand = self.parse_unary()?;
            let span = start_span.merge(operand.span());

            if let Expression::Literal {
                value: Literal::Int(n),
                ..
            } = operand
            {
                return Ok(Expression::Literal {
                    value: Literal::Int(-n),
                    span,
                });
            }

            return Ok(Expression::negation(start_span, operand));
        }

        self.parse_primary()
    }
}

/// Builds a binary node spanning both operands.
fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    let span = left.span().merge(right.span());
    Expression::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    }
}
