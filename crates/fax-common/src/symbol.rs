//! String interning.
//!
//! Identifiers recur constantly (every read and write of a variable repeats
//! its name), so instead of cloning a `String` at every use site we intern
//! the text once and hand out a cheap, `Copy` [`Symbol`]. Equality and
//! hashing on a `Symbol` are then integer operations instead of string
//! comparisons, which matters most in the symbol table and in the parse
//! tree, where the same identifier text is looked up repeatedly.
//!
//! The table never evicts entries: compiler runs are short-lived and the set
//! of distinct identifiers in a source file is small, so there is no benefit
//! to reclaiming memory before the process exits.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

/// An interned string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn intern(text: &str) -> Symbol {
        INTERNER.with(|i| i.borrow_mut().intern(text))
    }

    pub fn as_str(&self) -> &'static str {
        INTERNER.with(|i| i.borrow().lookup(*self))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct Interner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&id) = self.map.get(text) {
            return Symbol(id);
        }
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(leaked);
        self.map.insert(leaked, id);
        Symbol(id)
    }

    fn lookup(&self, sym: Symbol) -> &'static str {
        self.strings[sym.0 as usize]
    }
}

thread_local! {
    static INTERNER: RefCell<Interner> = RefCell::new(Interner::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_same_symbol() {
        let a = Symbol::intern("accumulator");
        let b = Symbol::intern("accumulator");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_text_interns_to_distinct_symbols() {
        let a = Symbol::intern("x");
        let b = Symbol::intern("y");
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_as_str() {
        let sym = Symbol::intern("loop_sum");
        assert_eq!(sym.as_str(), "loop_sum");
    }
}
