//! The symbol table (spec §3): a flat, single-scope, unordered collection
//! keyed by name. The source language has no nested scopes, so unlike a
//! general-purpose compiler's rib/scope-tree this is a single map for the
//! whole program.

use crate::types::Ty;
use fax_common::{Handler, Span, Symbol};
use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
pub struct SymbolInfo {
    pub ty: Ty,
    /// The span of the symbol's first introduction, kept for diagnostics.
    pub declared_at: Span,
}

#[derive(Default)]
pub struct SymbolTable {
    symbols: FxHashMap<Symbol, SymbolInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: Symbol) -> Option<&SymbolInfo> {
        self.symbols.get(&name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Introduces `name` with type `ty` if it is not yet known; otherwise,
    /// if the existing type differs in kind from `ty`, warns and
    /// overwrites it (spec §3 Symbol: "Reassigning a differently-typed
    /// expression to an existing symbol is a warning, not an error, and
    /// the type is rewritten").
    pub fn assign(&mut self, name: Symbol, ty: Ty, span: Span, handler: &mut Handler) {
        match self.symbols.get_mut(&name) {
            Some(existing) => {
                if !existing.ty.same_kind(&ty) {
                    handler.warn(
                        format!(
                            "symbol '{name}' retyped from {} to {ty} on reassignment",
                            existing.ty
                        ),
                        span,
                    );
                }
                existing.ty = ty;
            }
            None => {
                self.symbols.insert(name, SymbolInfo { ty, declared_at: span });
            }
        }
    }
}
