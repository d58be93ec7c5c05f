//! Expression type checking.
//!
//! This module is split into focused submodules:
//! - `operators`: Binary operators and `not`
//! - `calls`: Function and procedure calls
//!
//! Expressions never introduce names, so checking one only reads the
//! current scope.

mod calls;
mod operators;

use crate::checker::core::TypeChecker;
use dwislpy_core::{Error, ErrorKind, Result, Type};
use dwislpy_parser::ast::Expression;

impl TypeChecker<'_> {
    /// Checks an expression and returns its type.
    ///
    /// This is the main entry point for expression type checking.
    /// It delegates to specialized methods for different expression types.
    pub(crate) fn check_expression(&self, expr: &Expression) -> Result<Type> {
        if let Some(operand) = expr.as_negation() {
            return self.check_negation(operand, expr.span());
        }

        match expr {
            Expression::Literal { value, .. } => Ok(value.value_type()),

            Expression::Variable { name, span } => self
                .current_scope()
                .lookup(name)
                .ok_or_else(|| self.unknown_variable_error(name, *span)),

            Expression::Binary {
                left,
                operator,
                right,
                span,
            } => self.check_binary_op(left, *operator, right, *span),

            Expression::Not { operand, span } => self.check_not(operand, *span),

            Expression::Input { prompt, span } => {
                let prompt_type = self.check_expression(prompt)?;
                if !prompt_type.is_str() {
                    return Err(Error::semantic(
                        ErrorKind::InvalidConversion,
                        format!("input() expects a 'str' prompt, found '{prompt_type}'"),
                        *span,
                    ));
                }
                Ok(Type::Str)
            }

            Expression::IntConvert { operand, span } => {
                let operand_type = self.check_expression(operand)?;
                if !(operand_type.is_int() || operand_type.is_bool()) {
                    return Err(Error::semantic(
                        ErrorKind::InvalidConversion,
                        format!("cannot convert '{operand_type}' to 'int'"),
                        *span,
                    ));
                }
                Ok(Type::Int)
            }

            Expression::StrConvert { operand, .. } => {
                self.check_expression(operand)?;
                Ok(Type::Str)
            }

            Expression::Call {
                callee,
                arguments,
                span,
            } => self.check_function_call(callee, arguments, *span),
        }
    }
}
