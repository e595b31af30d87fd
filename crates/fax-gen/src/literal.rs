//! Literal translation (spec §4.4): booleans, null, numbers, strings,
//! lists, and list indexing.

use fax_par::ast::*;
use std::fmt::Write as _;

pub fn emit_num(num: &Num, out: &mut String) {
    out.push(match num.sign {
        Sign::Plus => '+',
        Sign::Minus => '-',
    });
    if let Some(int_part) = &num.int_part {
        out.push_str(int_part);
    }
    if let Some(frac) = &num.frac {
        out.push('.');
        out.push_str(frac);
    }
    if let Some((sign, digits)) = &num.exp {
        out.push('e');
        out.push(match sign {
            Sign::Plus => '+',
            Sign::Minus => '-',
        });
        out.push_str(digits);
    }
}

pub fn emit_bool(value: bool, out: &mut String) {
    out.push_str(if value { "True" } else { "False" });
}

pub fn emit_null(out: &mut String) {
    out.push_str("None");
}

/// `QuotedStr` with no interpolants is emitted verbatim (its `raw` already
/// carries the surrounding quotes). With interpolants it becomes
/// `"…" %(obj1,obj2,…)` (spec §9 Open Question 2: positional interpolation).
pub fn emit_quoted_str(qs: &QuotedStr, out: &mut String) {
    out.push_str(&qs.raw);
    if !qs.interpolants.is_empty() {
        out.push_str(" %(");
        for (i, obj) in qs.interpolants.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            crate::expr::emit_obj(obj, out);
        }
        out.push(')');
    }
}

pub fn emit_str(str_lit: &StrLit, out: &mut String) {
    for (i, part) in str_lit.parts.iter().enumerate() {
        if i > 0 {
            out.push_str(" + ");
        }
        emit_quoted_str(part, out);
    }
}

pub fn emit_list(list: &ListLit, out: &mut String) {
    out.push('[');
    for (i, elem) in list.elems.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        crate::expr::emit_obj(elem, out);
    }
    out.push(']');
}

pub fn emit_list_elem(elem: &ListElem, out: &mut String) {
    out.push_str(elem.name.as_str());
    out.push('[');
    match &elem.index {
        Index::Int(n, _) => {
            let _ = write!(out, "{n}");
        }
        Index::Var(name, _) => out.push_str(name.as_str()),
    }
    out.push(']');
}
