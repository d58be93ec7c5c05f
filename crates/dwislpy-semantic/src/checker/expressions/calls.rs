//! Function and procedure call checking.

use crate::checker::core::TypeChecker;
use crate::definitions::Signature;
use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use dwislpy_parser::ast::Expression;

impl<'a> TypeChecker<'a> {
    /// Checks a call used as a value and returns the callee's return type.
    pub(crate) fn check_function_call(
        &self,
        callee: &str,
        arguments: &[Expression],
        span: Span,
    ) -> Result<Type> {
        let signature = self.check_call(callee, arguments, span)?;

        if signature.is_procedure() {
            return Err(Error::semantic(
                ErrorKind::TypeMismatch,
                format!("procedure '{callee}' does not return a value"),
                span,
            ));
        }

        Ok(signature.return_type)
    }

    /// Checks a call in statement position. The callee must be a procedure.
    pub(crate) fn check_procedure_call(
        &self,
        callee: &str,
        arguments: &[Expression],
        span: Span,
    ) -> Result<()> {
        let signature = self.check_call(callee, arguments, span)?;

        if !signature.is_procedure() {
            return Err(self.type_mismatch_error(
                &format!("'{callee}' called as a procedure"),
                Type::None,
                signature.return_type,
                span,
            ));
        }

        Ok(())
    }

    /// Resolves the callee and checks the arguments against its formals.
    fn check_call(
        &self,
        callee: &str,
        arguments: &[Expression],
        span: Span,
    ) -> Result<&'a Signature> {
        let definitions = self.definitions;
        let signature = definitions.get(callee).ok_or_else(|| {
            Error::semantic(
                ErrorKind::UnknownIdentifier,
                format!("function '{callee}' is not defined"),
                span,
            )
        })?;

        let scope = self.symbols.scope(signature.scope);
        if arguments.len() != scope.formal_count() {
            return Err(Error::semantic(
                ErrorKind::ArityMismatch,
                format!(
                    "'{callee}' expects {} argument(s), found {}",
                    scope.formal_count(),
                    arguments.len()
                ),
                span,
            ));
        }

        for (index, (argument, formal)) in arguments.iter().zip(scope.formals()).enumerate() {
            let arg_type = self.check_expression(argument)?;
            if !formal.symbol_type.equals(arg_type) {
                return Err(self.type_mismatch_error(
                    &format!("argument {} of '{callee}'", index + 1),
                    formal.symbol_type,
                    arg_type,
                    argument.span(),
                ));
            }
        }

        Ok(signature)
    }
}
