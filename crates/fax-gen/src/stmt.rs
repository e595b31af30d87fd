//! Statement translation (spec §4.4): each line preceded by its indent and
//! terminated by a newline, bodies recursing at `depth + 1`.

use crate::error::GenError;
use crate::expr::{emit_expr, emit_obj};
use crate::writer::Writer;
use fax_par::ast::*;

pub fn emit_lines(lines: &[Line], depth: usize, w: &mut Writer) -> Result<(), GenError> {
    for line in lines {
        emit_line(line, depth, w)?;
    }
    Ok(())
}

fn emit_line(line: &Line, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    match &line.stmt {
        Stmt::Assign(assign) => emit_assign(assign, depth, w),
        Stmt::Input(input) => emit_input(input, depth, w),
        Stmt::Output(output) => emit_output(output, depth, w),
        Stmt::If(if_line) => emit_if(if_line, depth, w),
        Stmt::Loop(loop_line) => emit_loop(loop_line, depth, w),
        Stmt::Break(_) => w.write_line(depth, "break"),
        Stmt::Continue(_) => w.write_line(depth, "continue"),
    }
}

fn emit_assign(assign: &Assign, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    let mut text = String::new();
    text.push_str(assign.name.as_str());
    text.push_str(" = ");
    emit_expr(&assign.expr, &mut text);
    w.write_line(depth, &text)
}

/// `<name> = <reader>(input())`; the reader wrapper is `int`/`float`/`bool`,
/// empty for `readStr`, and — per §8 scenario 1 — also empty for the bare
/// `readIn` form, since the target language has no notion of its `undef`
/// source type to wrap toward.
fn emit_input(input: &Input, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    let wrapper = match input.reader {
        ReaderKind::Int => Some("int"),
        ReaderKind::Float => Some("float"),
        ReaderKind::Bool => Some("bool"),
        ReaderKind::Str | ReaderKind::Undef => None,
    };
    let text = match wrapper {
        Some(wrapper) => format!("{} = {wrapper}(input())", input.name.as_str()),
        None => format!("{} = input()", input.name.as_str()),
    };
    w.write_line(depth, &text)
}

fn emit_output(output: &Output, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    let mut text = String::from("print(");
    emit_obj(&output.obj, &mut text);
    text.push(')');
    w.write_line(depth, &text)
}

fn emit_if(if_line: &IfLine, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    let mut text = String::from("if ");
    emit_expr(&if_line.cond, &mut text);
    text.push(':');
    w.write_line(depth, &text)?;
    emit_lines(&if_line.body, depth + 1, w)?;
    if let Some(else_body) = &if_line.else_body {
        w.write_line(depth, "else:")?;
        emit_lines(else_body, depth + 1, w)?;
    }
    Ok(())
}

fn emit_loop(loop_line: &LoopLine, depth: usize, w: &mut Writer) -> Result<(), GenError> {
    let mut text = String::from("while ");
    emit_expr(&loop_line.cond, &mut text);
    text.push(':');
    w.write_line(depth, &text)?;
    emit_lines(&loop_line.body, depth + 1, w)
}
