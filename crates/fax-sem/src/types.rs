//! The type lattice (spec §4.3) and the four operator result-type tables.
//!
//! `list` carries its element type directly as `Ty::List(Box<Ty>)` rather
//! than as a separate field alongside a bare `list` tag — the spec's
//! "(name, type, element-type)" triple is exactly what a recursive sum
//! type already expresses, and it rules out the otherwise-representable
//! nonsense state of an element type on a non-list symbol (spec §9 Design
//! Notes: "make [the operator tables] compile-time constant data keyed by
//! the type enum" applies the same way to the type itself).

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    Int,
    Float,
    String,
    Bool,
    Null,
    List(Box<Ty>),
    /// Bottom type used only during symbol introduction (spec §3 Symbol).
    Undef,
}

impl Ty {
    /// True when `self` and `other` are the same outer kind, ignoring a
    /// list's element type — the comparison the spec's reassignment
    /// warning is defined over ("type... is rewritten", not element-type).
    pub fn same_kind(&self, other: &Ty) -> bool {
        match (self, other) {
            (Ty::List(_), Ty::List(_)) => true,
            _ => self == other,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Ty::Int | Ty::Float)
    }
}

impl std::fmt::Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::Int => write!(f, "int"),
            Ty::Float => write!(f, "float"),
            Ty::String => write!(f, "string"),
            Ty::Bool => write!(f, "bool"),
            Ty::Null => write!(f, "null"),
            Ty::List(elem) => write!(f, "list<{elem}>"),
            Ty::Undef => write!(f, "undef"),
        }
    }
}

/// `arith`: `+ - * %` and integer `/`. int⊗int→int, (int|float)⊗(int|float)
/// otherwise →float; everything else is not permitted.
pub fn arith(left: &Ty, right: &Ty) -> Option<Ty> {
    match (left, right) {
        (Ty::Int, Ty::Int) => Some(Ty::Int),
        (Ty::Int, Ty::Float) | (Ty::Float, Ty::Int) | (Ty::Float, Ty::Float) => Some(Ty::Float),
        _ => None,
    }
}

/// `floatdiv`: `/.`. Always produces `float` for numeric operands.
pub fn floatdiv(left: &Ty, right: &Ty) -> Option<Ty> {
    match (left, right) {
        (Ty::Int, Ty::Int)
        | (Ty::Int, Ty::Float)
        | (Ty::Float, Ty::Int)
        | (Ty::Float, Ty::Float) => Some(Ty::Float),
        _ => None,
    }
}

/// `compare`: `< <= > >=`. numeric⊗numeric→bool; otherwise not permitted.
pub fn compare(left: &Ty, right: &Ty) -> Option<Ty> {
    if left.is_numeric() && right.is_numeric() {
        Some(Ty::Bool)
    } else {
        None
    }
}

/// `logic`: `== != && ||`. Every non-list pair yields bool; list⊗list
/// yields bool; list mixed with non-list is not permitted.
pub fn logic(left: &Ty, right: &Ty) -> Option<Ty> {
    match (left, right) {
        (Ty::List(_), Ty::List(_)) => Some(Ty::Bool),
        (Ty::List(_), _) | (_, Ty::List(_)) => None,
        _ => Some(Ty::Bool),
    }
}

/// Numeric unification for list elements (spec §4.3 `ListExpr`): identical
/// types unify to themselves; int and float unify to float; anything else
/// must match exactly or the list is ill-typed.
pub fn unify(a: &Ty, b: &Ty) -> Option<Ty> {
    match (a, b) {
        (Ty::Int, Ty::Float) | (Ty::Float, Ty::Int) => Some(Ty::Float),
        _ if a == b => Some(a.clone()),
        _ => None,
    }
}
