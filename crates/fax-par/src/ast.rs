//! Parse tree node types (spec §3, §4.2).
//!
//! Modeled as a family of enums/structs rather than a uniform
//! kind-plus-children node (spec §9 Design Notes, option (b)): each
//! grammatical variant owns exactly the children its production allows,
//! which makes the semantic analyzer and emitter pattern-complete by
//! construction instead of needing to assert shape at runtime.

use fax_common::{Span, Symbol};

/// The root of a parse tree: `Program → (Line Endline)*`.
#[derive(Debug, Clone)]
pub struct Program {
    pub lines: Vec<Line>,
    pub span: Span,
}

/// One `Line Endline` pair. The endline itself carries no tree shape beyond
/// having been consumed; it is not retained as a node.
#[derive(Debug, Clone)]
pub struct Line {
    pub stmt: Stmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Assign(Assign),
    Input(Input),
    Output(Output),
    If(IfLine),
    Loop(LoopLine),
    Break(Span),
    Continue(Span),
}

#[derive(Debug, Clone)]
pub struct Assign {
    pub name: Symbol,
    pub name_span: Span,
    pub expr: Expr,
    pub span: Span,
}

/// The four typed readers pin the target symbol's type; the bare `readIn`
/// form (spec §8 scenario 1) leaves it `Undef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKind {
    Undef,
    Int,
    Float,
    Str,
    Bool,
}

#[derive(Debug, Clone)]
pub struct Input {
    pub reader: ReaderKind,
    pub name: Symbol,
    pub name_span: Span,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Output {
    pub obj: Obj,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfLine {
    pub cond: Expr,
    pub body: Vec<Line>,
    pub else_body: Option<Vec<Line>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct LoopLine {
    pub cond: Expr,
    pub body: Vec<Line>,
    pub span: Span,
}

/// `CondOp → '==' | '!=' | '<' | '<=' | '>' | '>=' | '&&' | '||'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

/// `'+' | '-'` in `Pred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

/// `'*' | '/' | '/.' | '%'` in `Term`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
    FloatDiv,
    Mod,
}

/// `Expr → Pred ( CondOp Expr )?`
#[derive(Debug, Clone)]
pub struct Expr {
    pub pred: Pred,
    pub rest: Option<(CondOp, Box<Expr>)>,
    pub span: Span,
}

/// `Pred → Term ( ('+'|'-') Pred )?`
#[derive(Debug, Clone)]
pub struct Pred {
    pub term: Term,
    pub rest: Option<(AddOp, Box<Pred>)>,
    pub span: Span,
}

/// `Term → BaseExpr ( ('*'|'/'|'/.'|'%') Term )?`
#[derive(Debug, Clone)]
pub struct Term {
    pub base: BaseExpr,
    pub rest: Option<(MulOp, Box<Term>)>,
    pub span: Span,
}

/// `BaseExpr → Obj | '(' Expr ')'`
#[derive(Debug, Clone)]
pub enum BaseExpr {
    Obj(Box<Obj>),
    Paren(Box<Expr>, Span),
}

/// `Obj → Var | ListElem | List | Str | Bool | Null | Num`
#[derive(Debug, Clone)]
pub enum Obj {
    Var(Symbol, Span),
    ListElem(ListElem),
    List(ListLit),
    Str(StrLit),
    Bool(bool, Span),
    Null(Span),
    Num(Num),
}

impl Obj {
    pub fn span(&self) -> Span {
        match self {
            Obj::Var(_, span) => *span,
            Obj::ListElem(e) => e.span,
            Obj::List(l) => l.span,
            Obj::Str(s) => s.span,
            Obj::Bool(_, span) => *span,
            Obj::Null(span) => *span,
            Obj::Num(n) => n.span,
        }
    }
}

/// `ListElem → Var '[' (Int|Var) ']'`
#[derive(Debug, Clone)]
pub struct ListElem {
    pub name: Symbol,
    pub name_span: Span,
    pub index: Index,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Index {
    Int(i64, Span),
    Var(Symbol, Span),
}

/// `List → '[' ListExpr? ']'`, `ListExpr → Obj (',' Obj)*`
#[derive(Debug, Clone)]
pub struct ListLit {
    pub elems: Vec<Obj>,
    pub span: Span,
}

/// `Str → QuotedStr ('+' QuotedStr)*`
#[derive(Debug, Clone)]
pub struct StrLit {
    pub parts: Vec<QuotedStr>,
    pub span: Span,
}

/// `QuotedStr → RawQuoted (',' Obj)*` — a quoted template plus its
/// positional interpolants (spec §9 Open Question 2).
#[derive(Debug, Clone)]
pub struct QuotedStr {
    /// The raw literal text, quotes included, with no escape processing.
    pub raw: String,
    pub interpolants: Vec<Obj>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// `Num → ('+'|'-')? Float`, `Float → Int Frac? Exp? | Frac Exp?`,
/// `Frac → '.' Int`, `Exp → '^' ('+'|'-')? Int`.
///
/// `int_part` is `None` exactly when the source used the bare-fraction form
/// (`Float → Frac Exp?`, e.g. `.5`); per Open Question 3 the leading sign
/// still applies uniformly in that case.
#[derive(Debug, Clone)]
pub struct Num {
    pub sign: Sign,
    pub int_part: Option<String>,
    pub frac: Option<String>,
    pub exp: Option<(Sign, String)>,
    pub span: Span,
}

impl Num {
    /// True iff this literal has neither a fractional nor an exponent part
    /// (spec §4.3 walk rule for `Num`).
    pub fn is_int(&self) -> bool {
        self.frac.is_none() && self.exp.is_none() && self.int_part.is_some()
    }
}
