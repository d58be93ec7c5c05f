//! Binary operator, prefix `-` and `not` type checking.

use crate::checker::core::TypeChecker;
use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use dwislpy_parser::ast::{BinaryOperator, Expression};

/// Operand types each binary operator accepts. Both operands must have the
/// same type, drawn from this list.
fn accepted_operands(operator: BinaryOperator) -> &'static [Type] {
    match operator {
        BinaryOperator::Add => &[Type::Int, Type::Str],
        BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::IntDivide
        | BinaryOperator::Modulo => &[Type::Int],
        BinaryOperator::Less | BinaryOperator::LessEqual | BinaryOperator::Equal => {
            &[Type::Int, Type::Str, Type::Bool]
        }
        BinaryOperator::And | BinaryOperator::Or => &[Type::Bool],
    }
}

impl TypeChecker<'_> {
    /// Checks a binary operation.
    pub(super) fn check_binary_op(
        &self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
        span: Span,
    ) -> Result<Type> {
        let left_type = self.check_expression(left)?;
        let right_type = self.check_expression(right)?;

        let accepted = accepted_operands(operator);
        if !left_type.equals(right_type) || !accepted.contains(&left_type) {
            return Err(Error::semantic(
                ErrorKind::InvalidOperandTypes,
                format!("operator '{operator}' cannot be applied to '{left_type}' and '{right_type}'"),
                span,
            ));
        }

        let result_type = match operator {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::IntDivide
            | BinaryOperator::Modulo => left_type,

            BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Equal
            | BinaryOperator::And
            | BinaryOperator::Or => Type::Bool,
        };

        Ok(result_type)
    }

    /// Checks prefix `-`. Only `int` can be negated.
    pub(super) fn check_negation(&self, operand: &Expression, span: Span) -> Result<Type> {
        let operand_type = self.check_expression(operand)?;

        if !operand_type.is_int() {
            return Err(Error::semantic(
                ErrorKind::InvalidOperandTypes,
                format!("prefix '-' cannot be applied to '{operand_type}'"),
                span,
            ));
        }

        Ok(Type::Int)
    }

    /// Checks a `not` expression.
    pub(super) fn check_not(&self, operand: &Expression, span: Span) -> Result<Type> {
        let operand_type = self.check_expression(operand)?;

        if !operand_type.is_bool() {
            return Err(Error::semantic(
                ErrorKind::InvalidOperandTypes,
                format!("operator 'not' cannot be applied to '{operand_type}'"),
                span,
            ));
        }

        Ok(Type::Bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_accepts_some_type() {
        use BinaryOperator::*;
        for operator in [
            Add, Subtract, Multiply, IntDivide, Modulo, Less, LessEqual, Equal, And, Or,
        ] {
            let accepted = accepted_operands(operator);
            assert!(!accepted.is_empty(), "{operator}");
            assert!(!accepted.contains(&Type::None), "{operator}");
        }
    }
}
