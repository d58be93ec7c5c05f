//! Statement type checking.
//!
//! Every statement check returns the statement's [`ReturnFlow`]; blocks fold
//! them left to right.

use crate::checker::core::{ReturnContext, TypeChecker};
use crate::flow::ReturnFlow;
use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use dwislpy_parser::ast::{Block, Expression, Statement};

impl TypeChecker<'_> {
    /// Checks a block of statements and folds their return flows.
    ///
    /// Statements after one that always returns are unreachable but are
    /// still checked.
    pub(crate) fn check_block(&mut self, block: &Block) -> Result<ReturnFlow> {
        let mut flow = ReturnFlow::Never;

        for statement in &block.statements {
            let next = self.check_statement(statement)?;
            flow = flow
                .then(next)
                .map_err(|conflict| self.flow_conflict_error(conflict, statement.span()))?;
        }

        Ok(flow)
    }

    /// Checks a statement.
    pub(crate) fn check_statement(&mut self, statement: &Statement) -> Result<ReturnFlow> {
        match statement {
            Statement::Assignment { name, value, span } => {
                self.check_assignment(name, value, *span)?;
                Ok(ReturnFlow::Never)
            }

            Statement::Declaration {
                name,
                var_type,
                initializer,
                span,
            } => {
                self.check_declaration(name, *var_type, initializer, *span)?;
                Ok(ReturnFlow::Never)
            }

            Statement::Pass { .. } => Ok(ReturnFlow::Never),

            Statement::Print { value, .. } => {
                self.check_expression(value)?;
                Ok(ReturnFlow::Never)
            }

            Statement::If {
                condition,
                then_block,
                else_block,
                span,
            } => self.check_if(condition, then_block, else_block.as_ref(), *span),

            Statement::While {
                condition, body, ..
            } => self.check_while(condition, body),

            Statement::Return { value, span } => self.check_return(value, *span),

            Statement::ProcedureReturn { span } => self.check_procedure_return(*span),

            Statement::ProcedureCall {
                callee,
                arguments,
                span,
            } => {
                self.check_procedure_call(callee, arguments, *span)?;
                Ok(ReturnFlow::Never)
            }
        }
    }

    /// Checks a declaration with initializer.
    ///
    /// The initializer is checked before the name is introduced, so it cannot
    /// refer to the variable being declared.
    fn check_declaration(
        &mut self,
        name: &str,
        var_type: Type,
        initializer: &Expression,
        span: Span,
    ) -> Result<()> {
        let init_type = self.check_expression(initializer)?;

        if !var_type.equals(init_type) {
            return Err(self.type_mismatch_error(
                &format!("declaration of '{name}'"),
                var_type,
                init_type,
                initializer.span(),
            ));
        }

        self.current_scope_mut().introduce(name, var_type, span)
    }

    /// Checks an assignment statement.
    fn check_assignment(&mut self, name: &str, value: &Expression, span: Span) -> Result<()> {
        let expected_type = self
            .current_scope()
            .lookup(name)
            .ok_or_else(|| self.unknown_variable_error(name, span))?;

        let value_type = self.check_expression(value)?;
        if !expected_type.equals(value_type) {
            return Err(self.type_mismatch_error(
                &format!("assignment to '{name}'"),
                expected_type,
                value_type,
                span,
            ));
        }

        Ok(())
    }

    /// Checks a value-returning `return` statement.
    fn check_return(&mut self, value: &Expression, span: Span) -> Result<ReturnFlow> {
        let ReturnContext::Definition(return_type) = self.context else {
            return Err(Error::semantic(
                ErrorKind::UnexpectedReturn,
                "return statement outside of a definition",
                span,
            ));
        };

        let value_type = self.check_expression(value)?;
        if !return_type.equals(value_type) {
            return Err(self.type_mismatch_error(
                "return value",
                return_type,
                value_type,
                span,
            ));
        }

        Ok(ReturnFlow::Always(value_type))
    }

    /// Checks a bare `return`, legal only inside a procedure.
    fn check_procedure_return(&self, span: Span) -> Result<ReturnFlow> {
        match self.context {
            ReturnContext::Definition(Type::None) => Ok(ReturnFlow::Always(Type::None)),
            ReturnContext::Definition(return_type) => Err(Error::semantic(
                ErrorKind::UnexpectedReturn,
                format!("return without a value in a definition returning '{return_type}'"),
                span,
            )),
            ReturnContext::Script => Err(Error::semantic(
                ErrorKind::UnexpectedReturn,
                "return statement outside of a definition",
                span,
            )),
        }
    }
}
