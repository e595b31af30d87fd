//! Expression grammar (spec §4.2): `Expr > Pred > Term > BaseExpr > Obj`,
//! precedence falling out of the grammar's own stratification rather than
//! a binding-power table — `CondOp` binds loosest, then `+`/`-`, then
//! `*`/`/`/`/.`/`%`, then atoms and parenthesized expressions.

use super::Parser;
use crate::ast::*;
use crate::error::ParseError;
use fax_lex::TokenKind;

pub(super) fn parse_expr(p: &mut Parser) -> Result<Expr, ParseError> {
    let pred = parse_pred(p)?;
    let start = pred.span;
    let rest = if let Some(op) = cond_op(p.peek().kind) {
        p.advance();
        let rhs = parse_expr(p)?;
        Some((op, Box::new(rhs)))
    } else {
        None
    };
    let span = match &rest {
        Some((_, rhs)) => start.to(rhs.span),
        None => start,
    };
    Ok(Expr { pred, rest, span })
}

pub(super) fn parse_pred(p: &mut Parser) -> Result<Pred, ParseError> {
    let term = parse_term(p)?;
    let start = term.span;
    let rest = if let Some(op) = add_op(p.peek().kind) {
        p.advance();
        let rhs = parse_pred(p)?;
        Some((op, Box::new(rhs)))
    } else {
        None
    };
    let span = match &rest {
        Some((_, rhs)) => start.to(rhs.span),
        None => start,
    };
    Ok(Pred { term, rest, span })
}

pub(super) fn parse_term(p: &mut Parser) -> Result<Term, ParseError> {
    let base = parse_base_expr(p)?;
    let start = base_span(&base);
    let rest = if let Some(op) = mul_op(p.peek().kind) {
        p.advance();
        let rhs = parse_term(p)?;
        Some((op, Box::new(rhs)))
    } else {
        None
    };
    let span = match &rest {
        Some((_, rhs)) => start.to(rhs.span),
        None => start,
    };
    Ok(Term { base, rest, span })
}

fn base_span(base: &BaseExpr) -> fax_common::Span {
    match base {
        BaseExpr::Obj(obj) => obj.span(),
        BaseExpr::Paren(_, span) => *span,
    }
}

pub(super) fn parse_base_expr(p: &mut Parser) -> Result<BaseExpr, ParseError> {
    if p.check(TokenKind::LParen) {
        let lparen = p.advance();
        let inner = parse_expr(p)?;
        let rparen = p.expect(TokenKind::RParen, "')'")?;
        return Ok(BaseExpr::Paren(Box::new(inner), lparen.span.to(rparen.span)));
    }
    Ok(BaseExpr::Obj(Box::new(parse_obj(p)?)))
}

/// `Obj → Var | ListElem | List | Str | Bool | Null | Num`. The `Var` vs
/// `ListElem` and `QuotedStr` vs `Str` choices each need one extra token of
/// look-ahead beyond the first (spec §4.2 Disambiguation).
pub(super) fn parse_obj(p: &mut Parser) -> Result<Obj, ParseError> {
    match p.peek().kind {
        TokenKind::Var if p.peek_second() == TokenKind::LBracket => {
            Ok(Obj::ListElem(parse_list_elem(p)?))
        }
        TokenKind::Var => {
            let tok = p.advance();
            Ok(Obj::Var(fax_common::Symbol::intern(&tok.lexeme), tok.span))
        }
        TokenKind::LBracket => Ok(Obj::List(parse_list(p)?)),
        TokenKind::QuotedStr => Ok(Obj::Str(parse_str(p)?)),
        TokenKind::Bool => {
            let tok = p.advance();
            Ok(Obj::Bool(tok.lexeme == "True", tok.span))
        }
        TokenKind::Null => {
            let tok = p.advance();
            Ok(Obj::Null(tok.span))
        }
        TokenKind::Int | TokenKind::Plus | TokenKind::Minus | TokenKind::Dot => {
            Ok(Obj::Num(parse_num(p)?))
        }
        _ => Err(ParseError::UnexpectedToken {
            expected: "an expression operand",
            found: p.peek().kind,
            span: p.peek().span,
        }),
    }
}

fn parse_list_elem(p: &mut Parser) -> Result<ListElem, ParseError> {
    let name_tok = p.expect(TokenKind::Var, "a variable name")?;
    let name = fax_common::Symbol::intern(&name_tok.lexeme);
    p.expect(TokenKind::LBracket, "'['")?;
    let index = match p.peek().kind {
        TokenKind::Int => {
            let tok = p.advance();
            let value: i64 = tok.lexeme.parse().map_err(|_| ParseError::UnexpectedToken {
                expected: "an integer index",
                found: TokenKind::Int,
                span: tok.span,
            })?;
            Index::Int(value, tok.span)
        }
        TokenKind::Var => {
            let tok = p.advance();
            Index::Var(fax_common::Symbol::intern(&tok.lexeme), tok.span)
        }
        _ => {
            return Err(ParseError::UnexpectedToken {
                expected: "an integer or variable index",
                found: p.peek().kind,
                span: p.peek().span,
            })
        }
    };
    let rbracket = p.expect(TokenKind::RBracket, "']'")?;
    Ok(ListElem {
        name,
        name_span: name_tok.span,
        index,
        span: name_tok.span.to(rbracket.span),
    })
}

fn parse_list(p: &mut Parser) -> Result<ListLit, ParseError> {
    let lbracket = p.expect(TokenKind::LBracket, "'['")?;
    let mut elems = Vec::new();
    if !p.check(TokenKind::RBracket) {
        elems.push(parse_obj(p)?);
        while p.check(TokenKind::Comma) {
            p.advance();
            elems.push(parse_obj(p)?);
        }
    }
    let rbracket = p.expect(TokenKind::RBracket, "']'")?;
    Ok(ListLit {
        elems,
        span: lbracket.span.to(rbracket.span),
    })
}

/// `Str → QuotedStr ('+' QuotedStr)*`. Only consumes a `+` when it is
/// followed immediately by another `QuotedStr` — `"a" + x` stops after one
/// part and leaves the `+` for `Pred`'s own additive production.
fn parse_str(p: &mut Parser) -> Result<StrLit, ParseError> {
    let first = parse_quoted_str(p)?;
    let span_start = first.span;
    let mut parts = vec![first];
    while p.check(TokenKind::Plus) && p.peek_second() == TokenKind::QuotedStr {
        p.advance();
        parts.push(parse_quoted_str(p)?);
    }
    let span = span_start.to(parts.last().unwrap().span);
    Ok(StrLit { parts, span })
}

/// `QuotedStr → RawQuoted (',' Obj)*` — a quoted template plus its
/// positional interpolants (spec §9 Open Question 2).
fn parse_quoted_str(p: &mut Parser) -> Result<QuotedStr, ParseError> {
    let tok = p.expect(TokenKind::QuotedStr, "a quoted string")?;
    let mut interpolants = Vec::new();
    let mut span = tok.span;
    while p.check(TokenKind::Comma) {
        p.advance();
        let obj = parse_obj(p)?;
        span = span.to(obj.span());
        interpolants.push(obj);
    }
    Ok(QuotedStr {
        raw: tok.lexeme,
        interpolants,
        span,
    })
}

/// `Num → ('+'|'-')? Float`, `Float → Int Frac? Exp? | Frac Exp?`. A
/// leading `.` (no integer part) is the bare-fraction form; per Open
/// Question 3 a sign applies uniformly to both forms.
fn parse_num(p: &mut Parser) -> Result<Num, ParseError> {
    let mut span = p.peek().span;
    let sign = match p.peek().kind {
        TokenKind::Plus => {
            p.advance();
            Sign::Plus
        }
        TokenKind::Minus => {
            p.advance();
            Sign::Minus
        }
        _ => Sign::Plus,
    };

    let int_part = if p.check(TokenKind::Int) {
        let tok = p.advance();
        span = span.to(tok.span);
        Some(tok.lexeme)
    } else {
        None
    };

    let frac = if p.check(TokenKind::Dot) {
        let dot = p.advance();
        let digits = p.expect(TokenKind::Int, "digits after '.'")?;
        span = span.to(digits.span);
        let _ = dot;
        Some(digits.lexeme)
    } else {
        None
    };

    if int_part.is_none() && frac.is_none() {
        return Err(ParseError::UnexpectedToken {
            expected: "a numeric literal",
            found: p.peek().kind,
            span: p.peek().span,
        });
    }

    let exp = if p.check(TokenKind::Caret) {
        p.advance();
        let exp_sign = match p.peek().kind {
            TokenKind::Plus => {
                p.advance();
                Sign::Plus
            }
            TokenKind::Minus => {
                p.advance();
                Sign::Minus
            }
            _ => Sign::Plus,
        };
        let digits = p.expect(TokenKind::Int, "digits after '^'")?;
        span = span.to(digits.span);
        Some((exp_sign, digits.lexeme))
    } else {
        None
    };

    Ok(Num {
        sign,
        int_part,
        frac,
        exp,
        span,
    })
}

fn cond_op(kind: TokenKind) -> Option<CondOp> {
    Some(match kind {
        TokenKind::EqEq => CondOp::Eq,
        TokenKind::NotEq => CondOp::NotEq,
        TokenKind::Lt => CondOp::Lt,
        TokenKind::LtEq => CondOp::LtEq,
        TokenKind::Gt => CondOp::Gt,
        TokenKind::GtEq => CondOp::GtEq,
        TokenKind::AndAnd => CondOp::And,
        TokenKind::OrOr => CondOp::Or,
        _ => return None,
    })
}

fn add_op(kind: TokenKind) -> Option<AddOp> {
    Some(match kind {
        TokenKind::Plus => AddOp::Add,
        TokenKind::Minus => AddOp::Sub,
        _ => return None,
    })
}

fn mul_op(kind: TokenKind) -> Option<MulOp> {
    Some(match kind {
        TokenKind::Star => MulOp::Mul,
        TokenKind::Slash => MulOp::Div,
        TokenKind::FloatSlash => MulOp::FloatDiv,
        TokenKind::Percent => MulOp::Mod,
        _ => return None,
    })
}
