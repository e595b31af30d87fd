//! Statement grammar (spec §4.2): `Program`, `Line`, and everything a
//! `Line` can be. `Program`'s production is reused verbatim for a
//! `LoopLine`'s body (`LoopLine → while IfCond Program`); `IfBody` is its
//! own, non-empty production that additionally stops at `else`.

use super::expr::{parse_expr, parse_obj};
use super::Parser;
use crate::ast::*;
use crate::error::ParseError;
use fax_lex::TokenKind;

/// Parses `(Line Endline)*`, stopping at end of input or at any token in
/// `stop_kinds` without consuming it — that token belongs to whichever
/// outer production is waiting on it (the enclosing `Line`'s own
/// `Endline`, or an `else`). Used for both the top-level `Program` and a
/// `while` loop's body, exactly as the grammar's reuse of `Program`
/// implies.
pub(super) fn parse_lines(
    p: &mut Parser,
    stop_kinds: &[TokenKind],
) -> Result<Vec<Line>, ParseError> {
    let mut lines = Vec::new();
    while !p.is_at_end() && !stop_kinds.contains(&p.peek().kind) {
        let line = parse_line(p)?;
        lines.push(line);
    }
    Ok(lines)
}

fn parse_line(p: &mut Parser) -> Result<Line, ParseError> {
    let stmt = parse_stmt(p)?;
    let stmt_span = stmt_span(&stmt);
    let endline = p.expect(TokenKind::Endline, "';' followed by a newline")?;
    Ok(Line {
        stmt,
        span: stmt_span.to(endline.span),
    })
}

fn stmt_span(stmt: &Stmt) -> fax_common::Span {
    match stmt {
        Stmt::Assign(a) => a.span,
        Stmt::Input(i) => i.span,
        Stmt::Output(o) => o.span,
        Stmt::If(i) => i.span,
        Stmt::Loop(l) => l.span,
        Stmt::Break(s) | Stmt::Continue(s) => *s,
    }
}

fn parse_stmt(p: &mut Parser) -> Result<Stmt, ParseError> {
    match p.peek().kind {
        TokenKind::Var => Ok(Stmt::Assign(parse_assign(p)?)),
        k if k.is_reader() => Ok(Stmt::Input(parse_input(p)?)),
        TokenKind::WriteOut => Ok(Stmt::Output(parse_output(p)?)),
        TokenKind::If => Ok(Stmt::If(parse_if_line(p)?)),
        TokenKind::While => Ok(Stmt::Loop(parse_loop_line(p)?)),
        TokenKind::Break => {
            let tok = p.advance();
            Ok(Stmt::Break(tok.span))
        }
        TokenKind::Continue => {
            let tok = p.advance();
            Ok(Stmt::Continue(tok.span))
        }
        _ => Err(ParseError::UnexpectedToken {
            expected: "a statement",
            found: p.peek().kind,
            span: p.peek().span,
        }),
    }
}

fn parse_assign(p: &mut Parser) -> Result<Assign, ParseError> {
    let name_tok = p.expect(TokenKind::Var, "a variable name")?;
    p.expect(TokenKind::Eq, "'='")?;
    let expr = parse_expr(p)?;
    let span = name_tok.span.to(expr.span);
    Ok(Assign {
        name: fax_common::Symbol::intern(&name_tok.lexeme),
        name_span: name_tok.span,
        expr,
        span,
    })
}

fn parse_input(p: &mut Parser) -> Result<Input, ParseError> {
    let reader_tok = p.advance();
    let reader = match reader_tok.kind {
        TokenKind::ReadIn => ReaderKind::Undef,
        TokenKind::ReadInt => ReaderKind::Int,
        TokenKind::ReadFloat => ReaderKind::Float,
        TokenKind::ReadStr => ReaderKind::Str,
        TokenKind::ReadBool => ReaderKind::Bool,
        _ => unreachable!("parse_input called on a non-reader token"),
    };
    let name_tok = p.expect(TokenKind::Var, "a variable name")?;
    let span = reader_tok.span.to(name_tok.span);
    Ok(Input {
        reader,
        name: fax_common::Symbol::intern(&name_tok.lexeme),
        name_span: name_tok.span,
        span,
    })
}

fn parse_output(p: &mut Parser) -> Result<Output, ParseError> {
    let write_tok = p.expect(TokenKind::WriteOut, "'writeOut'")?;
    let obj = parse_obj(p)?;
    let span = write_tok.span.to(obj.span());
    Ok(Output { obj, span })
}

fn parse_if_cond(p: &mut Parser) -> Result<Expr, ParseError> {
    p.expect(TokenKind::LParen, "'('")?;
    let expr = parse_expr(p)?;
    p.expect(TokenKind::RParen, "')'")?;
    Ok(expr)
}

fn parse_if_line(p: &mut Parser) -> Result<IfLine, ParseError> {
    let if_tok = p.expect(TokenKind::If, "'if'")?;
    let cond = parse_if_cond(p)?;

    let body_start = p.peek().span;
    let body = parse_lines(p, &[TokenKind::Endline, TokenKind::Else])?;
    if body.is_empty() {
        return Err(ParseError::EmptyIfBody { span: body_start });
    }

    let else_body = if p.check(TokenKind::Else) {
        p.advance();
        let else_start = p.peek().span;
        let else_lines = parse_lines(p, &[TokenKind::Endline])?;
        if else_lines.is_empty() {
            return Err(ParseError::EmptyIfBody { span: else_start });
        }
        Some(else_lines)
    } else {
        None
    };

    let last_span = else_body
        .as_ref()
        .and_then(|b| b.last())
        .or_else(|| body.last())
        .map(|l| l.span)
        .unwrap_or(cond.span);
    Ok(IfLine {
        cond,
        body,
        else_body,
        span: if_tok.span.to(last_span),
    })
}

fn parse_loop_line(p: &mut Parser) -> Result<LoopLine, ParseError> {
    let while_tok = p.expect(TokenKind::While, "'while'")?;
    let cond = parse_if_cond(p)?;
    let body = parse_lines(p, &[TokenKind::Endline])?;
    let last_span = body.last().map(|l| l.span).unwrap_or(cond.span);
    Ok(LoopLine {
        cond,
        body,
        span: while_tok.span.to(last_span),
    })
}
