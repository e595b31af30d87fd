//! Integer literals (spec §4.1): a maximal run of ASCII digits. A run that
//! starts with `0` and has further digits is rejected; a bare `0` is fine.
//! Fractional parts and exponents are a parser-level concern (`Num` combines
//! this token with `Dot`/`Caret` tokens per the grammar); the lexer only
//! ever produces `Int`.

use super::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub(super) fn scan(lexer: &mut Lexer<'_>, start: (usize, u32, u32)) -> Result<Token, LexError> {
    while lexer.cursor.current_char().is_ascii_digit() {
        lexer.cursor.advance();
    }
    let lexeme = lexer.cursor.slice(start.0);
    if lexeme.len() > 1 && lexeme.starts_with('0') {
        return Err(LexError::LeadingZeroInt {
            span: lexer.span_from(start),
        });
    }
    Ok(lexer.finish(start, TokenKind::Int))
}
