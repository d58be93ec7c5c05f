//! Core type checker structure.

use crate::definitions::DefinitionTable;
use crate::symbol_table::{Scope, ScopeId, SymbolTable};
use dwislpy_core::Type;

/// Which returns are legal where the checker currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnContext {
    /// The main script: no return statement is legal.
    Script,
    /// A definition body declared to return the given type.
    Definition(Type),
}

/// Type checker for DWISLPY programs.
///
/// Holds the frozen definition table by shared reference; the only state it
/// mutates is the symbol table scope of the body being checked.
pub struct TypeChecker<'a> {
    /// Signatures of all definitions, registered before any body is checked
    pub(crate) definitions: &'a DefinitionTable,
    /// Arena of scopes: the main script's plus one per definition
    pub(crate) symbols: SymbolTable,
    /// The scope statements and expressions currently resolve names in
    pub(crate) scope: ScopeId,
    /// What a return statement must look like here
    pub(crate) context: ReturnContext,
}

impl<'a> TypeChecker<'a> {
    /// Creates a type checker positioned in the main script.
    pub fn new(definitions: &'a DefinitionTable, symbols: SymbolTable) -> Self {
        Self {
            definitions,
            symbols,
            scope: SymbolTable::MAIN,
            context: ReturnContext::Script,
        }
    }

    /// Consumes the type checker and returns the populated symbol table.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// The scope currently being checked.
    pub(crate) fn current_scope(&self) -> &Scope {
        self.symbols.scope(self.scope)
    }

    /// The scope currently being checked (mutable version).
    pub(crate) fn current_scope_mut(&mut self) -> &mut Scope {
        self.symbols.scope_mut(self.scope)
    }

    /// Moves the checker into `scope` with the given return context.
    pub(crate) fn enter(&mut self, scope: ScopeId, context: ReturnContext) {
        self.scope = scope;
        self.context = context;
    }
}
