//! Identifiers (spec §4.1): a leading letter followed by letters or digits,
//! then reclassified against the reserved-word table. Anything not in that
//! table is an ordinary `Var`.

use super::Lexer;
use crate::error::LexError;
use crate::token::{keyword_from_ident, Token, TokenKind};

pub(super) fn scan(lexer: &mut Lexer<'_>, start: (usize, u32, u32)) -> Result<Token, LexError> {
    lexer.cursor.advance(); // leading letter already matched by the caller
    while {
        let c = lexer.cursor.current_char();
        c.is_ascii_alphanumeric()
    } {
        lexer.cursor.advance();
    }
    let lexeme = lexer.cursor.slice(start.0);
    let kind = keyword_from_ident(lexeme).unwrap_or(TokenKind::Var);
    Ok(lexer.finish(start, kind))
}
