//! Exercises spec.md §8's quantified round-trip invariant: `parse(emit(parse(S)))`
//! must be structurally identical to `parse(S)` (modulo literal normalization)
//! for any semantically valid `S`.
//!
//! `fax_gen::emit` renders *target*-language text (the Python-shaped output
//! in spec.md §4.4 — colon-delimited blocks, `and`/`or`, no `;\n`
//! terminators). That is a different grammar from the one `fax_par` parses;
//! compiling to a different language is the entire point of this front end,
//! so the emitted text is not itself a valid input to `fax_lex`/`fax_par`
//! (e.g. `:` is not a recognized character, and an `if` with no parens
//! around its condition has no matching production). The part of the
//! invariant that is actually implementable and checkable against this
//! front end is the parser/AST side of it: a parse tree serialized back
//! into *source* syntax and re-parsed must reproduce a structurally
//! identical tree. This test builds a small source-syntax unparser for
//! that purpose (distinct from `fax_gen`'s real, target-facing emitter) and
//! checks exactly that property.

use fax_par::ast::*;

fn parse_and_check(src: &str) -> Program {
    let tokens = fax_lex::strip_whitespace(fax_lex::tokenize(src).unwrap());
    let program = fax_par::parse(tokens).unwrap();
    fax_sem::analyze(&program).unwrap();
    program
}

#[test]
fn round_trip_through_source_syntax_preserves_tree_shape() {
    let src = "\
x = 1 + 2 * 3;\n\
y = [1, 2.5];\n\
z = y[0];\n\
s = \"hello\" + \"world\";\n\
t = \"got\",x;\n\
if (x == 1 && z == 1) writeOut s;\n\
else writeOut x;\n\
;\n\
i = 0;\n\
while (i < 10) writeOut i;\n\
break;\n\
;\n\
readInt n;\n\
readIn u;\n\
w = (1 + 2) * 3 /. 4 % 5;\n\
b = True;\n\
nothing = NULL;\n\
";

    let tree1 = parse_and_check(src);
    let reserialized = unparse_program(&tree1);
    let tree2 = parse_and_check(&reserialized);

    assert!(
        programs_eq(&tree1, &tree2),
        "round-trip tree mismatch:\nfirst parse:  {tree1:#?}\nsource:\n{reserialized}\nsecond parse: {tree2:#?}"
    );
}

#[test]
fn empty_program_round_trips() {
    let tree1 = parse_and_check("");
    let reserialized = unparse_program(&tree1);
    assert_eq!(reserialized, "");
    let tree2 = parse_and_check(&reserialized);
    assert!(programs_eq(&tree1, &tree2));
}

// --- source-syntax unparser (test-only; mirrors the grammar in spec.md §4.2) ---

fn unparse_program(program: &Program) -> String {
    unparse_lines(&program.lines)
}

fn unparse_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&unparse_stmt(&line.stmt));
        out.push_str(";\n");
    }
    out
}

fn unparse_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Assign(a) => format!("{} = {}", a.name.as_str(), unparse_expr(&a.expr)),
        Stmt::Input(i) => format!("{} {}", reader_keyword(i.reader), i.name.as_str()),
        Stmt::Output(o) => format!("writeOut {}", unparse_obj(&o.obj)),
        Stmt::Break(_) => "break".to_string(),
        Stmt::Continue(_) => "continue".to_string(),
        Stmt::If(if_line) => {
            let mut s = format!(
                "if ({}) {}",
                unparse_expr(&if_line.cond),
                unparse_lines(&if_line.body)
            );
            if let Some(else_body) = &if_line.else_body {
                s.push_str("else ");
                s.push_str(&unparse_lines(else_body));
            }
            s
        }
        Stmt::Loop(loop_line) => format!(
            "while ({}) {}",
            unparse_expr(&loop_line.cond),
            unparse_lines(&loop_line.body)
        ),
    }
}

fn reader_keyword(reader: ReaderKind) -> &'static str {
    match reader {
        ReaderKind::Undef => "readIn",
        ReaderKind::Int => "readInt",
        ReaderKind::Float => "readFloat",
        ReaderKind::Str => "readStr",
        ReaderKind::Bool => "readBool",
    }
}

fn unparse_expr(e: &Expr) -> String {
    let mut s = unparse_pred(&e.pred);
    if let Some((op, rhs)) = &e.rest {
        s.push(' ');
        s.push_str(cond_op_lexeme(*op));
        s.push(' ');
        s.push_str(&unparse_expr(rhs));
    }
    s
}

fn unparse_pred(p: &Pred) -> String {
    let mut s = unparse_term(&p.term);
    if let Some((op, rhs)) = &p.rest {
        s.push(' ');
        s.push_str(match op {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        });
        s.push(' ');
        s.push_str(&unparse_pred(rhs));
    }
    s
}

fn unparse_term(t: &Term) -> String {
    let mut s = unparse_base_expr(&t.base);
    if let Some((op, rhs)) = &t.rest {
        s.push(' ');
        s.push_str(match op {
            MulOp::Mul => "*",
            MulOp::Div => "/",
            MulOp::FloatDiv => "/.",
            MulOp::Mod => "%",
        });
        s.push(' ');
        s.push_str(&unparse_term(rhs));
    }
    s
}

fn unparse_base_expr(b: &BaseExpr) -> String {
    match b {
        BaseExpr::Obj(obj) => unparse_obj(obj),
        BaseExpr::Paren(expr, _) => format!("({})", unparse_expr(expr)),
    }
}

fn unparse_obj(o: &Obj) -> String {
    match o {
        Obj::Var(name, _) => name.as_str().to_string(),
        Obj::ListElem(elem) => unparse_list_elem(elem),
        Obj::List(list) => unparse_list(list),
        Obj::Str(str_lit) => unparse_str(str_lit),
        Obj::Bool(value, _) => if *value { "True" } else { "False" }.to_string(),
        Obj::Null(_) => "NULL".to_string(),
        Obj::Num(num) => unparse_num(num),
    }
}

fn unparse_list_elem(elem: &ListElem) -> String {
    let index = match &elem.index {
        Index::Int(n, _) => n.to_string(),
        Index::Var(name, _) => name.as_str().to_string(),
    };
    format!("{}[{}]", elem.name.as_str(), index)
}

fn unparse_list(list: &ListLit) -> String {
    let elems: Vec<String> = list.elems.iter().map(unparse_obj).collect();
    format!("[{}]", elems.join(","))
}

fn unparse_str(str_lit: &StrLit) -> String {
    str_lit
        .parts
        .iter()
        .map(unparse_quoted_str)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn unparse_quoted_str(qs: &QuotedStr) -> String {
    let mut out = qs.raw.clone();
    for interpolant in &qs.interpolants {
        out.push(',');
        out.push_str(&unparse_obj(interpolant));
    }
    out
}

fn unparse_num(n: &Num) -> String {
    let mut out = String::new();
    out.push(match n.sign {
        Sign::Plus => '+',
        Sign::Minus => '-',
    });
    if let Some(int_part) = &n.int_part {
        out.push_str(int_part);
    }
    if let Some(frac) = &n.frac {
        out.push('.');
        out.push_str(frac);
    }
    if let Some((sign, digits)) = &n.exp {
        out.push('^');
        out.push(match sign {
            Sign::Plus => '+',
            Sign::Minus => '-',
        });
        out.push_str(digits);
    }
    out
}

fn cond_op_lexeme(op: CondOp) -> &'static str {
    match op {
        CondOp::Eq => "==",
        CondOp::NotEq => "!=",
        CondOp::Lt => "<",
        CondOp::LtEq => "<=",
        CondOp::Gt => ">",
        CondOp::GtEq => ">=",
        CondOp::And => "&&",
        CondOp::Or => "||",
    }
}

// --- structural equality, ignoring spans (literal normalization: the
// unparser always prints an explicit sign and digit-for-digit text, so no
// further canonicalization is needed beyond ignoring source position) ---

fn programs_eq(a: &Program, b: &Program) -> bool {
    lines_eq(&a.lines, &b.lines)
}

fn lines_eq(a: &[Line], b: &[Line]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| stmt_eq(&x.stmt, &y.stmt))
}

fn opt_lines_eq(a: &Option<Vec<Line>>, b: &Option<Vec<Line>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => lines_eq(x, y),
        _ => false,
    }
}

fn stmt_eq(a: &Stmt, b: &Stmt) -> bool {
    match (a, b) {
        (Stmt::Assign(x), Stmt::Assign(y)) => x.name == y.name && expr_eq(&x.expr, &y.expr),
        (Stmt::Input(x), Stmt::Input(y)) => x.reader == y.reader && x.name == y.name,
        (Stmt::Output(x), Stmt::Output(y)) => obj_eq(&x.obj, &y.obj),
        (Stmt::If(x), Stmt::If(y)) => {
            expr_eq(&x.cond, &y.cond)
                && lines_eq(&x.body, &y.body)
                && opt_lines_eq(&x.else_body, &y.else_body)
        }
        (Stmt::Loop(x), Stmt::Loop(y)) => expr_eq(&x.cond, &y.cond) && lines_eq(&x.body, &y.body),
        (Stmt::Break(_), Stmt::Break(_)) => true,
        (Stmt::Continue(_), Stmt::Continue(_)) => true,
        _ => false,
    }
}

fn expr_eq(a: &Expr, b: &Expr) -> bool {
    pred_eq(&a.pred, &b.pred)
        && match (&a.rest, &b.rest) {
            (None, None) => true,
            (Some((op1, r1)), Some((op2, r2))) => op1 == op2 && expr_eq(r1, r2),
            _ => false,
        }
}

fn pred_eq(a: &Pred, b: &Pred) -> bool {
    term_eq(&a.term, &b.term)
        && match (&a.rest, &b.rest) {
            (None, None) => true,
            (Some((op1, r1)), Some((op2, r2))) => op1 == op2 && pred_eq(r1, r2),
            _ => false,
        }
}

fn term_eq(a: &Term, b: &Term) -> bool {
    base_eq(&a.base, &b.base)
        && match (&a.rest, &b.rest) {
            (None, None) => true,
            (Some((op1, r1)), Some((op2, r2))) => op1 == op2 && term_eq(r1, r2),
            _ => false,
        }
}

fn base_eq(a: &BaseExpr, b: &BaseExpr) -> bool {
    match (a, b) {
        (BaseExpr::Obj(x), BaseExpr::Obj(y)) => obj_eq(x, y),
        (BaseExpr::Paren(x, _), BaseExpr::Paren(y, _)) => expr_eq(x, y),
        _ => false,
    }
}

fn obj_eq(a: &Obj, b: &Obj) -> bool {
    match (a, b) {
        (Obj::Var(n1, _), Obj::Var(n2, _)) => n1 == n2,
        (Obj::ListElem(x), Obj::ListElem(y)) => x.name == y.name && index_eq(&x.index, &y.index),
        (Obj::List(x), Obj::List(y)) => {
            x.elems.len() == y.elems.len()
                && x.elems.iter().zip(&y.elems).all(|(p, q)| obj_eq(p, q))
        }
        (Obj::Str(x), Obj::Str(y)) => str_eq(x, y),
        (Obj::Bool(x, _), Obj::Bool(y, _)) => x == y,
        (Obj::Null(_), Obj::Null(_)) => true,
        (Obj::Num(x), Obj::Num(y)) => num_eq(x, y),
        _ => false,
    }
}

fn index_eq(a: &Index, b: &Index) -> bool {
    match (a, b) {
        (Index::Int(x, _), Index::Int(y, _)) => x == y,
        (Index::Var(x, _), Index::Var(y, _)) => x == y,
        _ => false,
    }
}

fn str_eq(a: &StrLit, b: &StrLit) -> bool {
    a.parts.len() == b.parts.len()
        && a.parts
            .iter()
            .zip(&b.parts)
            .all(|(p, q)| quoted_str_eq(p, q))
}

fn quoted_str_eq(a: &QuotedStr, b: &QuotedStr) -> bool {
    a.raw == b.raw
        && a.interpolants.len() == b.interpolants.len()
        && a.interpolants
            .iter()
            .zip(&b.interpolants)
            .all(|(p, q)| obj_eq(p, q))
}

fn num_eq(a: &Num, b: &Num) -> bool {
    a.sign == b.sign
        && a.int_part == b.int_part
        && a.frac == b.frac
        && match (&a.exp, &b.exp) {
            (None, None) => true,
            (Some((s1, d1)), Some((s2, d2))) => s1 == s2 && d1 == d2,
            _ => false,
        }
}
