//! The semantic walk itself (spec §4.3): assigns and checks types, and
//! validates control-flow constructs. A single pass over the parse tree,
//! left to right, depth first — the same traversal order the emitter
//! later relies on for its own left-to-right, in-source-order output.

use crate::context::{ContextKind, ContextStack};
use crate::error::SemanticError;
use crate::symbol_table::SymbolTable;
use crate::types::{arith, compare, floatdiv, logic, unify, Ty};
use fax_common::{Handler, Span, Symbol};
use fax_par::ast::*;

pub struct Analyzer {
    pub symbols: SymbolTable,
    pub handler: Handler,
    context: ContextStack,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            handler: Handler::new(),
            context: ContextStack::new(),
        }
    }

    /// Analyzes a whole program. Stops and returns the first error raised;
    /// the context stack is guaranteed empty on both successful return and
    /// on error, since every push is paired with a pop in the same scope
    /// that pushed it (spec §3 invariant).
    pub fn analyze(&mut self, program: &Program) -> Result<(), SemanticError> {
        self.analyze_lines(&program.lines)
    }

    fn analyze_lines(&mut self, lines: &[Line]) -> Result<(), SemanticError> {
        for line in lines {
            self.analyze_line(line)?;
        }
        Ok(())
    }

    fn analyze_line(&mut self, line: &Line) -> Result<(), SemanticError> {
        match &line.stmt {
            Stmt::Assign(assign) => self.analyze_assign(assign),
            Stmt::Input(input) => self.analyze_input(input),
            Stmt::Output(output) => self.type_of_obj(&output.obj).map(|_| ()),
            Stmt::If(if_line) => self.analyze_if_line(if_line),
            Stmt::Loop(loop_line) => self.analyze_loop_line(loop_line),
            Stmt::Break(span) => self.check_loop_context(*span, SemanticError::BreakOutOfContext),
            Stmt::Continue(span) => {
                self.check_loop_context(*span, SemanticError::ContinueOutOfContext)
            }
        }
    }

    fn check_loop_context(
        &self,
        span: Span,
        err: fn(Span) -> SemanticError,
    ) -> Result<(), SemanticError> {
        if self.context.is_in_breakable_context() {
            Ok(())
        } else {
            Err(err(span))
        }
    }

    fn analyze_assign(&mut self, assign: &Assign) -> Result<(), SemanticError> {
        let ty = self.type_of_expr(&assign.expr)?;
        self.symbols
            .assign(assign.name, ty, assign.span, &mut self.handler);
        Ok(())
    }

    fn analyze_input(&mut self, input: &Input) -> Result<(), SemanticError> {
        // Per spec §9 Open Question 1, the bare `readIn` form pins the
        // target symbol's type to `undef` and only warns, matching the
        // original `semantic.c::analyze_Input`; `readInt`/`readFloat`/
        // `readStr`/`readBool` pin a concrete type.
        let ty = match input.reader {
            ReaderKind::Undef => Ty::Undef,
            ReaderKind::Int => Ty::Int,
            ReaderKind::Float => Ty::Float,
            ReaderKind::Str => Ty::String,
            ReaderKind::Bool => Ty::Bool,
        };
        if matches!(input.reader, ReaderKind::Undef) {
            self.handler.warn(
                format!("'{}' read with an unsuffixed reader has undefined type", input.name),
                input.span,
            );
        }
        self.symbols
            .assign(input.name, ty, input.span, &mut self.handler);
        Ok(())
    }

    fn analyze_if_line(&mut self, if_line: &IfLine) -> Result<(), SemanticError> {
        self.check_condition_is_bool(&if_line.cond)?;
        self.context.push(ContextKind::IfLine);
        let result = self.analyze_lines(&if_line.body);
        self.context.pop();
        result?;
        if let Some(else_body) = &if_line.else_body {
            self.context.push(ContextKind::IfLine);
            let result = self.analyze_lines(else_body);
            self.context.pop();
            result?;
        }
        Ok(())
    }

    fn analyze_loop_line(&mut self, loop_line: &LoopLine) -> Result<(), SemanticError> {
        self.check_condition_is_bool(&loop_line.cond)?;
        self.context.push(ContextKind::LoopLine);
        let result = self.analyze_lines(&loop_line.body);
        self.context.pop();
        result
    }

    fn check_condition_is_bool(&mut self, cond: &Expr) -> Result<(), SemanticError> {
        let ty = self.type_of_expr(cond)?;
        if ty == Ty::Bool {
            Ok(())
        } else {
            Err(SemanticError::SemanticError {
                message: format!("condition must be bool, found {ty}"),
                span: cond.span,
            })
        }
    }

    fn type_of_expr(&mut self, expr: &Expr) -> Result<Ty, SemanticError> {
        let left = self.type_of_pred(&expr.pred)?;
        match &expr.rest {
            None => Ok(left),
            Some((op, rhs)) => {
                let right = self.type_of_expr(rhs)?;
                let table = match op {
                    CondOp::Eq | CondOp::NotEq | CondOp::And | CondOp::Or => logic,
                    CondOp::Lt | CondOp::LtEq | CondOp::Gt | CondOp::GtEq => compare,
                };
                table(&left, &right).ok_or_else(|| SemanticError::NodeTypeError {
                    op: cond_op_lexeme(*op),
                    left: left.to_string(),
                    right: right.to_string(),
                    span: expr.span,
                })
            }
        }
    }

    fn type_of_pred(&mut self, pred: &Pred) -> Result<Ty, SemanticError> {
        let left = self.type_of_term(&pred.term)?;
        match &pred.rest {
            None => Ok(left),
            Some((op, rhs)) => {
                let right = self.type_of_pred(rhs)?;
                arith(&left, &right).ok_or_else(|| SemanticError::NodeTypeError {
                    op: match op {
                        AddOp::Add => "+",
                        AddOp::Sub => "-",
                    },
                    left: left.to_string(),
                    right: right.to_string(),
                    span: pred.span,
                })
            }
        }
    }

    fn type_of_term(&mut self, term: &Term) -> Result<Ty, SemanticError> {
        let left = self.type_of_base_expr(&term.base)?;
        match &term.rest {
            None => Ok(left),
            Some((op, rhs)) => {
                let right = self.type_of_term(rhs)?;
                let (table, lexeme): (fn(&Ty, &Ty) -> Option<Ty>, &'static str) = match op {
                    MulOp::Mul => (arith, "*"),
                    MulOp::Div => (arith, "/"),
                    MulOp::Mod => (arith, "%"),
                    MulOp::FloatDiv => (floatdiv, "/."),
                };
                table(&left, &right).ok_or_else(|| SemanticError::NodeTypeError {
                    op: lexeme,
                    left: left.to_string(),
                    right: right.to_string(),
                    span: term.span,
                })
            }
        }
    }

    fn type_of_base_expr(&mut self, base: &BaseExpr) -> Result<Ty, SemanticError> {
        match base {
            BaseExpr::Obj(obj) => self.type_of_obj(obj),
            BaseExpr::Paren(expr, _) => self.type_of_expr(expr),
        }
    }

    fn type_of_obj(&mut self, obj: &Obj) -> Result<Ty, SemanticError> {
        match obj {
            Obj::Var(name, span) => self.lookup_var(*name, *span),
            Obj::ListElem(elem) => self.type_of_list_elem(elem),
            Obj::List(list) => self.type_of_list(list),
            Obj::Str(str_lit) => self.type_of_str(str_lit),
            Obj::Bool(_, _) => Ok(Ty::Bool),
            Obj::Null(_) => Ok(Ty::Null),
            Obj::Num(num) => Ok(if num.is_int() { Ty::Int } else { Ty::Float }),
        }
    }

    fn lookup_var(&self, name: Symbol, span: Span) -> Result<Ty, SemanticError> {
        self.symbols
            .lookup(name)
            .map(|info| info.ty.clone())
            .ok_or(SemanticError::UndefinedSymbol { name, span })
    }

    fn type_of_list_elem(&mut self, elem: &ListElem) -> Result<Ty, SemanticError> {
        let list_ty = self.lookup_var(elem.name, elem.name_span)?;
        let elem_ty = match &list_ty {
            Ty::List(elem_ty) => (**elem_ty).clone(),
            other => {
                return Err(SemanticError::SemanticError {
                    message: format!("'{}' is not a list (found {other})", elem.name),
                    span: elem.span,
                })
            }
        };
        if let Index::Var(name, span) = &elem.index {
            let index_ty = self.lookup_var(*name, *span)?;
            if index_ty != Ty::Int {
                return Err(SemanticError::SemanticError {
                    message: format!("list index must be int, found {index_ty}"),
                    span: *span,
                });
            }
        }
        Ok(elem_ty)
    }

    fn type_of_list(&mut self, list: &ListLit) -> Result<Ty, SemanticError> {
        let mut elem_ty = Ty::Undef;
        for (i, elem) in list.elems.iter().enumerate() {
            let ty = self.type_of_obj(elem)?;
            elem_ty = if i == 0 {
                ty
            } else {
                unify(&elem_ty, &ty).ok_or_else(|| SemanticError::ListTypeError {
                    left: elem_ty.to_string(),
                    right: ty.to_string(),
                    span: list.span,
                })?
            };
        }
        Ok(Ty::List(Box::new(elem_ty)))
    }

    fn type_of_str(&mut self, str_lit: &StrLit) -> Result<Ty, SemanticError> {
        for part in &str_lit.parts {
            for interpolant in &part.interpolants {
                self.type_of_obj(interpolant)?;
            }
        }
        Ok(Ty::String)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
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
        CondOp::And => "&&",
        CondOp::Or => "||",
    }
}
