//! Definition table: the signatures of every function and procedure.
//!
//! The table is filled once, before any body is checked, so definitions can
//! call each other regardless of source order. After registration it is only
//! ever read.

use crate::symbol_table::{ScopeId, SymbolTable};
use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use dwislpy_parser::Program;
use std::collections::HashMap;

/// What call sites need to know about a definition.
///
/// The formal parameters live in the definition's own scope; call sites read
/// them through `formal_count`/`formal_at` on [`Signature::scope`].
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: String,
    pub return_type: Type,
    /// The definition's own scope, holding its formals and locals.
    pub scope: ScopeId,
    pub span: Span,
}

impl Signature {
    /// Whether this is a procedure (declared to return `None`).
    #[must_use]
    pub fn is_procedure(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Mapping from definition name to signature.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    signatures: HashMap<String, Signature>,
}

impl DefinitionTable {
    /// Registers every definition of `program`, allocating one scope per
    /// definition in `symbols` and introducing its formals there.
    ///
    /// # Errors
    /// Returns a `DuplicateBinding` error for a repeated definition name or
    /// a repeated formal name.
    pub fn register(program: &Program, symbols: &mut SymbolTable) -> Result<Self> {
        let mut table = Self::default();

        for def in &program.definitions {
            if table.signatures.contains_key(&def.name) {
                return Err(Error::semantic(
                    ErrorKind::DuplicateBinding,
                    format!("'{}' is defined more than once", def.name),
                    def.span,
                ));
            }

            let scope = symbols.add_scope();
            for param in &def.params {
                symbols
                    .scope_mut(scope)
                    .introduce_formal(&param.name, param.param_type, param.span)?;
            }

            tracing::trace!(
                name = %def.name,
                arity = def.params.len(),
                returns = %def.return_type,
                "registered definition"
            );

            table.signatures.insert(
                def.name.clone(),
                Signature {
                    name: def.name.clone(),
                    return_type: def.return_type,
                    scope,
                    span: def.span,
                },
            );
        }

        Ok(table)
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.signatures.get(name)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
