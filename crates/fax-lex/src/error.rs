//! Lexical error kinds (spec §7, structural domain).

use fax_common::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{found}' at {span}")]
    UnexpectedChar { found: char, span: Span },

    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    #[error("integer literal starting with '0' followed by further digits at {span}")]
    LeadingZeroInt { span: Span },

    #[error("'!' must be followed by '=' at {span}")]
    LoneBang { span: Span },

    #[error("'&' must be followed by another '&' at {span}")]
    LoneAmp { span: Span },

    #[error("'|' must be followed by another '|' at {span}")]
    LonePipe { span: Span },

    #[error("';' not immediately followed by a newline at {span}")]
    DanglingSemicolon { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::LeadingZeroInt { span }
            | LexError::LoneBang { span }
            | LexError::LoneAmp { span }
            | LexError::LonePipe { span }
            | LexError::DanglingSemicolon { span } => *span,
        }
    }
}
