//! fax-common - shared foundation for the fax compiler front end.
//!
//! Every stage of the pipeline (lexer, parser, semantic analyzer, emitter)
//! needs the same handful of cross-cutting types: a way to name a source
//! location ([`Span`]), a cheap handle for repeated identifier text
//! ([`Symbol`]), and a place to collect non-fatal diagnostics ([`Handler`]).
//! None of these are specific to any one stage, so they live here rather
//! than being duplicated or awkwardly shared between crates that otherwise
//! must not depend on each other.

mod diagnostic;
mod span;
mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
