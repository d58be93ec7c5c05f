//! Program and definition checking.

use crate::checker::core::{ReturnContext, TypeChecker};
use crate::flow::ReturnFlow;
use crate::symbol_table::SymbolTable;
use dwislpy_core::{Error, ErrorKind, Result};
use dwislpy_parser::ast::{Definition, Program};

impl TypeChecker<'_> {
    /// Checks every definition body, then the main script.
    ///
    /// Signatures must already be registered in the definition table.
    pub fn check_program(&mut self, program: &Program) -> Result<()> {
        for def in &program.definitions {
            self.check_definition(def)?;
        }

        self.check_main(program)
    }

    /// Checks a definition body against its declared return type.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %def.name))]
    pub(crate) fn check_definition(&mut self, def: &Definition) -> Result<()> {
        let scope = self
            .definitions
            .get(&def.name)
            .map(|signature| signature.scope)
            .ok_or_else(|| {
                Error::semantic(
                    ErrorKind::UnknownIdentifier,
                    format!("definition '{}' was never registered", def.name),
                    def.span,
                )
            })?;

        self.enter(scope, ReturnContext::Definition(def.return_type));
        let flow = self.check_block(&def.body)?;
        tracing::debug!(%flow, "checked definition body");

        match flow {
            ReturnFlow::Always(ty) if ty.equals(def.return_type) => Ok(()),
            ReturnFlow::Always(ty) => Err(self.type_mismatch_error(
                &format!("body of '{}'", def.name),
                def.return_type,
                ty,
                def.span,
            )),
            ReturnFlow::Maybe(_) => Err(Error::semantic(
                ErrorKind::PossiblyMissingReturn,
                format!(
                    "'{}' may reach the end of its body without returning '{}'",
                    def.name, def.return_type
                ),
                def.span,
            )),
            ReturnFlow::Never => Err(Error::semantic(
                ErrorKind::MissingReturn,
                format!(
                    "'{}' never returns a value of type '{}'",
                    def.name, def.return_type
                ),
                def.span,
            )),
        }
    }

    /// Checks the main script, which must never return.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn check_main(&mut self, program: &Program) -> Result<()> {
        self.enter(SymbolTable::MAIN, ReturnContext::Script);
        let flow = self.check_block(&program.main)?;
        tracing::debug!(%flow, "checked main script");

        match flow {
            ReturnFlow::Never => Ok(()),
            ReturnFlow::Maybe(_) | ReturnFlow::Always(_) => Err(Error::semantic(
                ErrorKind::UnexpectedReturn,
                "the main script must not return",
                program.main.span,
            )),
        }
    }
}
