//! `GenError` (spec §7 resource domain): the emitter assumes the parse tree
//! it walks is already semantically valid, so it raises nothing in normal
//! operation; this exists for the one case that isn't excluded by semantic
//! analysis — an indentation depth whose byte width would overflow — in the
//! same per-crate `thiserror` style the teacher's `faxc-gen::error` uses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("indentation depth overflowed while emitting (depth {depth})")]
    DepthOverflow { depth: usize },
}
