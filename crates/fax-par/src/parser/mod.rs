//! Recursive-descent parser core: the token cursor and the small set of
//! helpers every production built on top of it shares (`peek`, `advance`,
//! `expect`). The grammar itself (§4.2) is split across the sibling
//! `stmt` and `expr` modules, one function per production, each taking
//! `&mut Parser` and failing fast on the first mismatch (no back-tracking
//! beyond the single token of look-ahead the grammar already bakes in).

mod expr;
mod stmt;

use crate::error::ParseError;
use fax_common::Span;
use fax_lex::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Synthetic token returned once `pos` runs past the end, so callers
    /// never have to special-case "no more tokens" separately from "found
    /// the wrong kind of token".
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_span = tokens.last().map(|t| t.span).unwrap_or(Span::DUMMY);
        let eof = Token::new(TokenKind::Eof, "", eof_span);
        Self { tokens, pos: 0, eof }
    }

    fn peek(&self) -> &Token {
        // The caller-supplied token stream never carries an explicit Eof
        // token (fax-lex stops at end of input), so a position past the
        // end reads as a synthetic Eof at the last seen span.
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// One token of additional look-ahead, used to disambiguate `Var` from
    /// `ListElem` and `QuotedStr + QuotedStr` from a bare `Str`.
    fn peek_second(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else if self.is_at_end() {
            Err(ParseError::UnexpectedEof {
                expected,
                span: self.peek().span,
            })
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.peek().kind,
                span: self.peek().span,
            })
        }
    }
}

/// Parses a whitespace-stripped token sequence into a `Program` (spec
/// §4.2). Fails on the first structural mismatch.
pub fn parse(tokens: Vec<Token>) -> Result<crate::ast::Program, ParseError> {
    let mut parser = Parser::new(tokens);
    let start_span = parser.peek().span;
    // Top-level `Program` uses the same stop rule as a nested loop body: it
    // stops at a bare `Endline` without consuming it. At the true top level
    // there is no enclosing `Line` left to consume such a token, so one
    // surviving here means the input had a stray `;\n` with no statement.
    let lines = stmt::parse_lines(&mut parser, &[TokenKind::Endline])?;
    if !parser.is_at_end() {
        return Err(ParseError::TrailingTokens {
            span: parser.peek().span,
        });
    }
    let span = lines
        .first()
        .map(|l| l.span.to(lines.last().unwrap().span))
        .unwrap_or(start_span);
    Ok(crate::ast::Program { lines, span })
}
