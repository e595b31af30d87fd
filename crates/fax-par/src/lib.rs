//! fax-par - the recursive-descent parser for the fax source language.
//!
//! Consumes the whitespace-stripped token sequence [`fax_lex`] produces and
//! builds a parse tree rooted at [`ast::Program`] (spec §4.2). The tree is
//! a family of enums/structs, one variant per grammar production, rather
//! than a uniform kind-plus-children node (spec §9 Design Notes option
//! (b)) — each node owns exactly the children its production allows, which
//! makes [`fax_sem`] and [`fax_gen`]'s traversals pattern-complete by
//! construction instead of needing to assert shape at runtime.
//!
//! Parsing fails fast: the first mismatched token abandons the current
//! derivation and returns a [`ParseError`], with no back-tracking beyond
//! the single token of look-ahead the grammar's own stratification needs.

pub mod ast;
mod error;
mod parser;

pub use error::ParseError;

/// Parses a whitespace-stripped token sequence into a `Program`.
pub fn parse(tokens: Vec<fax_lex::Token>) -> Result<ast::Program, ParseError> {
    parser::parse(tokens)
}
