//! Two-character-maximal operators (spec §4.1).
//!
//! Each of these characters decides its token with exactly one character of
//! look-ahead: `=`/`==`, `<`/`<=`, `>`/`>=`, `/`/`/.`, `!=` (bare `!` is an
//! error), `&&` (bare `&` is an error), `||` (bare `|` is an error).

use super::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub(super) fn scan(
    lexer: &mut Lexer<'_>,
    start: (usize, u32, u32),
    c: char,
) -> Result<Token, LexError> {
    lexer.cursor.advance();
    let next = lexer.cursor.current_char();

    let kind = match (c, next) {
        ('=', '=') => take_second(lexer, TokenKind::EqEq),
        ('=', _) => TokenKind::Eq,
        ('<', '=') => take_second(lexer, TokenKind::LtEq),
        ('<', _) => TokenKind::Lt,
        ('>', '=') => take_second(lexer, TokenKind::GtEq),
        ('>', _) => TokenKind::Gt,
        ('/', '.') => take_second(lexer, TokenKind::FloatSlash),
        ('/', _) => TokenKind::Slash,
        ('!', '=') => take_second(lexer, TokenKind::NotEq),
        ('!', _) => {
            return Err(LexError::LoneBang {
                span: lexer.span_from(start),
            })
        }
        ('&', '&') => take_second(lexer, TokenKind::AndAnd),
        ('&', _) => {
            return Err(LexError::LoneAmp {
                span: lexer.span_from(start),
            })
        }
        ('|', '|') => take_second(lexer, TokenKind::OrOr),
        ('|', _) => {
            return Err(LexError::LonePipe {
                span: lexer.span_from(start),
            })
        }
        _ => unreachable!("operator::scan called with non-operator char"),
    };

    Ok(lexer.finish(start, kind))
}

fn take_second(lexer: &mut Lexer<'_>, kind: TokenKind) -> TokenKind {
    lexer.cursor.advance();
    kind
}
