//! fax-sem - the semantic analyzer for the fax source language.
//!
//! Walks the parse tree [`fax_par`] produces, assigning and checking types
//! against the four operator tables and validating `break`/`continue`
//! against the enclosing-construct context stack (spec §4.3). Semantic
//! errors are distinct kinds and analysis stops at the first one; type
//! overwrites on reassignment and unsuffixed `readIn` targets are
//! non-fatal and collected as warnings instead.

mod analyzer;
mod context;
mod error;
mod symbol_table;
mod types;

pub use analyzer::Analyzer;
pub use context::ContextKind;
pub use error::SemanticError;
pub use symbol_table::{SymbolInfo, SymbolTable};
pub use types::Ty;

/// Analyzes `program`, returning the populated symbol table and any
/// warnings collected along the way, or the first semantic error raised.
pub fn analyze(
    program: &fax_par::ast::Program,
) -> Result<(SymbolTable, fax_common::Handler), SemanticError> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(program)?;
    Ok((analyzer.symbols, analyzer.handler))
}
