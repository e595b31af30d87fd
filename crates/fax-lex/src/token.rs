//! Token kinds.
//!
//! A [`Token`] is the pair the spec describes: a [`TokenKind`] drawn from a
//! closed enumeration, and the exact lexeme that matched. `WS` is a first
//! class kind rather than being dropped during scanning — the parser strips
//! it in a separate filter pass, which keeps `Lexer::tokenize` a faithful,
//! whitespace-preserving record of the input (see the round-trip property in
//! spec §8: concatenating every lexeme in order reproduces the source).

use fax_common::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Star,
    Percent,
    Caret,
    Dot,

    // Operators (maximal-munch two-character forms)
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Slash,
    FloatSlash,
    AndAnd,
    OrOr,

    // Statement terminator: `;` immediately followed by `\n`
    Endline,

    // Whitespace run (skipped by the parser, not by the lexer)
    WS,

    // Literals
    QuotedStr,
    Int,
    Var,
    Bool,
    Null,

    // Reserved words
    If,
    Else,
    While,
    Break,
    Continue,
    WriteOut,

    // Reader keywords. `ReadIn` is the bare, untyped form (spec §8 scenario
    // 1); the other four pin the target symbol's type (spec §4.3).
    ReadIn,
    ReadInt,
    ReadFloat,
    ReadStr,
    ReadBool,

    Eof,
}

impl TokenKind {
    pub fn is_reader(self) -> bool {
        matches!(
            self,
            TokenKind::ReadIn
                | TokenKind::ReadInt
                | TokenKind::ReadFloat
                | TokenKind::ReadStr
                | TokenKind::ReadBool
        )
    }

    pub fn is_cond_op(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::AndAnd
                | TokenKind::OrOr
        )
    }
}

/// A lexical token: its kind and the exact source text that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

/// Maps an identifier lexeme to its reserved-word kind, or `None` if it is an
/// ordinary variable name.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    Some(match ident {
        "True" | "False" => TokenKind::Bool,
        "NULL" => TokenKind::Null,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "writeOut" => TokenKind::WriteOut,
        "readIn" => TokenKind::ReadIn,
        "readInt" => TokenKind::ReadInt,
        "readFloat" => TokenKind::ReadFloat,
        "readStr" => TokenKind::ReadStr,
        "readBool" => TokenKind::ReadBool,
        _ => return None,
    })
}
