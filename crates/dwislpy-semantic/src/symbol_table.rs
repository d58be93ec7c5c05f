//! Symbol tables for tracking variables and formals during semantic analysis.
//!
//! DWISLPY scopes never nest: the main script has one scope and every
//! definition has exactly one scope of its own, with no access to the main
//! script's variables. Scopes live in an arena owned by [`SymbolTable`] and
//! are addressed by [`ScopeId`].

use dwislpy_core::{Error, ErrorKind, Result, Span, Type};
use std::collections::HashMap;

/// Represents a symbol in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The name of the symbol
    pub name: String,
    /// The type of the symbol, fixed when it is introduced
    pub symbol_type: Type,
}

impl Symbol {
    /// Creates a new symbol.
    pub fn new(name: impl Into<String>, symbol_type: Type) -> Self {
        Self {
            name: name.into(),
            symbol_type,
        }
    }
}

/// Stable handle to a scope in a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// One flat scope: the main script's variables, or a definition's formals
/// and locals.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    symbols: HashMap<String, Symbol>,
    /// Formal parameter names in declared order.
    formals: Vec<String>,
}

impl Scope {
    /// Introduces a new binding.
    ///
    /// # Errors
    /// Returns a `DuplicateBinding` error if `name` is already bound here.
    pub fn introduce(&mut self, name: &str, symbol_type: Type, span: Span) -> Result<()> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(Error::semantic(
                ErrorKind::DuplicateBinding,
                format!(
                    "'{name}' is already introduced in this scope with type '{}'",
                    existing.symbol_type
                ),
                span,
            ));
        }

        self.symbols
            .insert(name.to_string(), Symbol::new(name, symbol_type));
        Ok(())
    }

    /// Introduces a formal parameter, appending it to the formal list.
    ///
    /// # Errors
    /// Returns a `DuplicateBinding` error if two formals share a name.
    pub fn introduce_formal(&mut self, name: &str, symbol_type: Type, span: Span) -> Result<()> {
        self.introduce(name, symbol_type, span)?;
        self.formals.push(name.to_string());
        Ok(())
    }

    /// Returns the type bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).map(|symbol| symbol.symbol_type)
    }

    /// Number of formal parameters.
    pub fn formal_count(&self) -> usize {
        self.formals.len()
    }

    /// The `index`-th formal parameter, in declared order.
    pub fn formal_at(&self, index: usize) -> Option<&Symbol> {
        self.formals
            .get(index)
            .and_then(|name| self.symbols.get(name))
    }

    /// Iterates over the formal parameters in declared order.
    pub fn formals(&self) -> impl Iterator<Item = &Symbol> + '_ {
        (0..self.formal_count()).filter_map(|index| self.formal_at(index))
    }

    /// Number of bindings, formals included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Arena of scopes. Index 0 is always the main script's scope.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// The main script's scope.
    pub const MAIN: ScopeId = ScopeId(0);

    /// Creates a symbol table holding only the (empty) main scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    /// Allocates a fresh, empty scope.
    pub fn add_scope(&mut self) -> ScopeId {
        self.scopes.push(Scope::default());
        ScopeId(self.scopes.len() - 1)
    }

    /// Returns the scope for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this table.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Returns the scope for `id` (mutable version).
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this table.
    pub fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }

    /// Number of scopes, the main scope included.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Always false: the main scope exists from construction.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_basic() {
        let mut table = SymbolTable::new();
        let main = table.scope_mut(SymbolTable::MAIN);

        assert!(main.introduce("x", Type::Int, Span::dummy()).is_ok());

        assert_eq!(main.lookup("x"), Some(Type::Int));
        assert_eq!(main.len(), 1);
    }

    #[test]
    fn test_symbol_table_undefined() {
        let table = SymbolTable::new();
        assert!(table.scope(SymbolTable::MAIN).lookup("undefined").is_none());
    }

    #[test]
    fn test_symbol_table_duplicate_error() {
        let mut table = SymbolTable::new();
        let main = table.scope_mut(SymbolTable::MAIN);

        main.introduce("x", Type::Int, Span::dummy()).unwrap();
        let err = main.introduce("x", Type::Str, Span::dummy()).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::DuplicateBinding));
        assert_eq!(main.lookup("x"), Some(Type::Int));
    }

    #[test]
    fn test_scopes_do_not_chain() {
        let mut table = SymbolTable::new();
        table
            .scope_mut(SymbolTable::MAIN)
            .introduce("x", Type::Int, Span::dummy())
            .unwrap();

        let local = table.add_scope();
        assert!(table.scope(local).lookup("x").is_none());

        table
            .scope_mut(local)
            .introduce("x", Type::Str, Span::dummy())
            .unwrap();
        assert_eq!(table.scope(local).lookup("x"), Some(Type::Str));
        assert_eq!(table.scope(SymbolTable::MAIN).lookup("x"), Some(Type::Int));
    }

    #[test]
    fn test_formals_keep_declared_order() {
        let mut table = SymbolTable::new();
        let id = table.add_scope();
        let scope = table.scope_mut(id);

        scope.introduce_formal("b", Type::Str, Span::dummy()).unwrap();
        scope.introduce_formal("a", Type::Int, Span::dummy()).unwrap();
        scope.introduce("local", Type::Bool, Span::dummy()).unwrap();

        assert_eq!(scope.formal_count(), 2);
        assert_eq!(scope.formal_at(0), Some(&Symbol::new("b", Type::Str)));
        assert_eq!(scope.formal_at(1), Some(&Symbol::new("a", Type::Int)));
        assert_eq!(scope.formal_at(2), None);
        assert_eq!(scope.len(), 3);

        let names: Vec<_> = scope.formals().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_duplicate_formal_is_rejected() {
        let mut scope = Scope::default();
        scope.introduce_formal("x", Type::Int, Span::dummy()).unwrap();
        let err = scope
            .introduce_formal("x", Type::Int, Span::dummy())
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::DuplicateBinding));
        assert_eq!(scope.formal_count(), 1);
    }
}
