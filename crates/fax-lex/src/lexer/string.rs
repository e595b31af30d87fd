//! Quoted string literals (spec §4.1): from `"` to the next `"` inclusive,
//! with no escape sequences. Reaching end-of-input before the closing quote
//! is an error.

use super::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub(super) fn scan(lexer: &mut Lexer<'_>, start: (usize, u32, u32)) -> Result<Token, LexError> {
    lexer.cursor.advance(); // consume opening '"'
    loop {
        if lexer.cursor.is_at_end() {
            return Err(LexError::UnterminatedString {
                span: lexer.span_from(start),
            });
        }
        let c = lexer.cursor.current_char();
        lexer.cursor.advance();
        if c == '"' {
            break;
        }
    }
    Ok(lexer.finish(start, TokenKind::QuotedStr))
}
