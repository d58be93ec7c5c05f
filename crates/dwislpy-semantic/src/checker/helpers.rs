//! Helper functions to reduce code duplication.

use crate::checker::core::TypeChecker;
use crate::flow::FlowConflict;
use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use dwislpy_parser::Expression;

impl TypeChecker<'_> {
    /// Creates a type mismatch error with formatted type names.
    pub(crate) fn type_mismatch_error(
        &self,
        message: &str,
        expected: Type,
        found: Type,
        span: Span,
    ) -> Error {
        Error::semantic(
            ErrorKind::TypeMismatch,
            format!("{message}: expected '{expected}', found '{found}'"),
            span,
        )
    }

    /// Converts a return-flow merge conflict into a type mismatch.
    pub(crate) fn flow_conflict_error(&self, conflict: FlowConflict, span: Span) -> Error {
        self.type_mismatch_error(
            "paths return different types",
            conflict.first,
            conflict.second,
            span,
        )
    }

    /// Validates that a condition expression is `bool`.
    pub(crate) fn check_bool_condition(
        &self,
        condition: &Expression,
        context: &str,
    ) -> Result<()> {
        let condition_type = self.check_expression(condition)?;

        if !condition_type.is_bool() {
            return Err(Error::semantic(
                ErrorKind::NonBooleanCondition,
                format!("{context} condition must be 'bool', found '{condition_type}'"),
                condition.span(),
            ));
        }

        Ok(())
    }

    /// Error for a name missing from the current scope.
    pub(crate) fn unknown_variable_error(&self, name: &str, span: Span) -> Error {
        Error::semantic(
            ErrorKind::UnknownIdentifier,
            format!("variable '{name}' was never introduced"),
            span,
        )
    }
}
