//! fax-gen - the emitter for the fax source language.
//!
//! Walks a parse tree assumed to already be semantically valid (spec §4.4)
//! and produces an indentation-based target-language program as a single
//! `String`. Takes no dependency on `fax-sem`: every piece of information
//! the emitter needs (reader kind, literal shape, operator) already lives
//! on the parse tree itself.

mod error;
mod expr;
mod literal;
mod stmt;
mod writer;

pub use error::GenError;

use fax_par::ast::Program;
use writer::Writer;

/// The default indentation step, in spaces, for one nesting level (spec
/// §4.4 "default step = 4").
pub const DEFAULT_INDENT_STEP: usize = 4;

pub fn emit(program: &Program) -> Result<String, GenError> {
    emit_with_step(program, DEFAULT_INDENT_STEP)
}

pub fn emit_with_step(program: &Program, step: usize) -> Result<String, GenError> {
    let mut w = Writer::new(step);
    stmt::emit_lines(&program.lines, 0, &mut w)?;
    Ok(w.finish())
}
