//! Semantic error kinds (spec §4.3, §7 semantic domain). Analysis stops at
//! the first one raised; there is no multi-error collection.

use fax_common::{Span, Symbol};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("undefined symbol '{name}' at {span}")]
    UndefinedSymbol { name: Symbol, span: Span },

    #[error("operator '{op}' is not defined for {left} and {right} at {span}")]
    NodeTypeError {
        op: &'static str,
        left: String,
        right: String,
        span: Span,
    },

    #[error("list elements have mismatched types ({left} vs {right}) at {span}")]
    ListTypeError {
        left: String,
        right: String,
        span: Span,
    },

    #[error("'break' used outside of an if or loop body at {span}")]
    BreakOutOfContext { span: Span },

    #[error("'continue' used outside of an if or loop body at {span}")]
    ContinueOutOfContext { span: Span },

    /// Catch-all for conditions the spec names without its own dedicated
    /// kind, e.g. an `if`/`while` condition that is not `bool`, or a list
    /// index that is not `int`.
    #[error("{message} at {span}")]
    SemanticError { message: String, span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::UndefinedSymbol { span, .. }
            | SemanticError::NodeTypeError { span, .. }
            | SemanticError::ListTypeError { span, .. }
            | SemanticError::BreakOutOfContext { span }
            | SemanticError::ContinueOutOfContext { span }
            | SemanticError::SemanticError { span, .. } => *span,
        }
    }
}
