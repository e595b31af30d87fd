//! The widened pipeline error (spec §7): one variant per stage plus `Io`,
//! assembled here — the one place downstream of every stage crate — since
//! those crates must not depend on one another (spec §3 Pipeline error).

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] anyhow::Error),

    #[error("lex error: {0}")]
    Lex(#[from] fax_lex::LexError),

    #[error("parse error: {0}")]
    Parse(#[from] fax_par::ParseError),

    #[error("semantic error: {0}")]
    Semantic(#[from] fax_sem::SemanticError),

    #[error("code generation error: {0}")]
    Gen(#[from] fax_gen::GenError),
}

impl FaxError {
    /// Exit code mapping (spec §6): 0 success is handled by the caller on
    /// `Ok`; `1` bad arguments, `2` I/O failure, `3` lex/parse error,
    /// `4` semantic error. Generation errors are bucketed with semantic
    /// errors — both are "the compiler rejected this otherwise well-formed
    /// program" rather than a structural or resource failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            FaxError::Config(_) => 1,
            FaxError::Io(_) => 2,
            FaxError::Lex(_) | FaxError::Parse(_) => 3,
            FaxError::Semantic(_) | FaxError::Gen(_) => 4,
        }
    }
}
