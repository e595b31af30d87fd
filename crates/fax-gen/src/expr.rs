//! Expression translation (spec §4.4): `left OP right` with a single space
//! around each operator, operator lexemes mapped verbatim except
//! `&&` → `and`, `||` → `or`, `/.` → `/`. Parenthesized base expressions
//! keep their own parentheses.

use crate::literal;
use fax_par::ast::*;

pub fn emit_expr(expr: &Expr, out: &mut String) {
    emit_pred(&expr.pred, out);
    if let Some((op, rhs)) = &expr.rest {
        out.push(' ');
        out.push_str(cond_op_lexeme(*op));
        out.push(' ');
        emit_expr(rhs, out);
    }
}

pub fn emit_pred(pred: &Pred, out: &mut String) {
    emit_term(&pred.term, out);
    if let Some((op, rhs)) = &pred.rest {
        out.push(' ');
        out.push_str(match op {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        });
        out.push(' ');
        emit_pred(rhs, out);
    }
}

pub fn emit_term(term: &Term, out: &mut String) {
    emit_base_expr(&term.base, out);
    if let Some((op, rhs)) = &term.rest {
        out.push(' ');
        out.push_str(mul_op_lexeme(*op));
        out.push(' ');
        emit_term(rhs, out);
    }
}

pub fn emit_base_expr(base: &BaseExpr, out: &mut String) {
    match base {
        BaseExpr::Obj(obj) => emit_obj(obj, out),
        BaseExpr::Paren(expr, _) => {
            out.push('(');
            emit_expr(expr, out);
            out.push(')');
        }
    }
}

pub fn emit_obj(obj: &Obj, out: &mut String) {
    match obj {
        Obj::Var(name, _) => out.push_str(name.as_str()),
        Obj::ListElem(elem) => literal::emit_list_elem(elem, out),
        Obj::List(list) => literal::emit_list(list, out),
        Obj::Str(str_lit) => literal::emit_str(str_lit, out),
        Obj::Bool(value, _) => literal::emit_bool(*value, out),
        Obj::Null(_) => literal::emit_null(out),
        Obj::Num(num) => literal::emit_num(num, out),
    }
}

fn cond_op_lexeme(op: CondOp) -> &'static str {
    match op {
        CondOp::Eq => "==",
        CondOp::NotEq => "!=",
        CondOp::Lt => "<",
        CondOp::LtEq => "<=",
        CondOp::Gt => ">",
        CondOp::GtEq => ">=",
        CondOp::And => "and",
        CondOp::Or => "or",
    }
}

fn mul_op_lexeme(op: MulOp) -> &'static str {
    match op {
        MulOp::Mul => "*",
        MulOp::Div => "/",
        MulOp::Mod => "%",
        MulOp::FloatDiv => "/",
    }
}
