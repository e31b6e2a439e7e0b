//! Dynamic and lexical name resolution through whole programs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use psi_eval::{buffer_handler, EvalErrorKind, Interpreter, InterpreterBuilder, Value};

fn session() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn run(src: &str) -> Interpreter {
    let mut interp = session();
    interp.interpret_source(src).unwrap();
    interp
}

#[test]
fn dynamic_outer_binding_visible_through_inner_scope() {
    let interp = run("/x 1 def\n10 dict begin\nx\nend");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(1)]);
}

#[test]
fn dynamic_inner_binding_shadows_outer() {
    let interp = run("/x 1 def\n10 dict begin\n/x 2 def x\nend x");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(2), Value::Int(1)]);
}

#[test]
fn dynamic_procedure_sees_caller_bindings() {
    let src = "
        /show { x } def
        /x 1 def
        10 dict begin
          /x 2 def
          show
        end
        show
    ";
    let interp = run(src);
    assert_eq!(interp.stack().as_slice(), &[Value::Int(2), Value::Int(1)]);
}

/// Defines `gety` inside an inner scope under lexical mode, leaves a second
/// handle to it on the stack, and rebinds that handle in the default
/// dictionary (in dynamic mode, so the snapshot is kept) after `end`.
const ESCAPED_LEXICAL: &str = "
    lex
    10 dict begin
      /y 42 def
      { y } dup /gety exch def
    end
    dyn /gety exch def lex
";

#[test]
fn lexical_snapshot_outlives_defining_scope() {
    let mut interp = run(ESCAPED_LEXICAL);
    assert_eq!(interp.dictionaries().depth(), 1);
    interp.interpret_line("gety").unwrap();
    assert_eq!(interp.stack().as_slice(), &[Value::Int(42)]);
}

#[test]
fn lexical_snapshot_beats_current_bindings() {
    let mut interp = run(ESCAPED_LEXICAL);
    interp.interpret_line("/y 7 def gety y").unwrap();
    assert_eq!(interp.stack().as_slice(), &[Value::Int(42), Value::Int(7)]);
}

#[test]
fn lexical_snapshot_captures_values_at_definition() {
    let interp = run("/y 1 def lex /f { y } def /y 2 def f");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(1)]);
}

#[test]
fn switching_mode_does_not_touch_existing_snapshots() {
    let interp = run("/y 1 def lex /f { y } def dyn /y 2 def f lex f");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(2), Value::Int(1)]);
}

#[test]
fn lexical_fallback_consults_top_dictionary_only() {
    // `h` has no snapshot (defined in dynamic mode); in lexical mode its
    // free name is looked up in the top dictionary alone.
    let mut interp = run("/y 1 def /h { y } def lex 10 dict begin");
    let err = interp.interpret_line("h").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnknownCommand { .. }));

    interp.interpret_line("/y 2 def h").unwrap();
    assert_eq!(interp.stack().as_slice(), &[Value::Int(2)]);
}

#[test]
fn dynamic_mode_ignores_snapshots() {
    let mut interp = run(ESCAPED_LEXICAL);
    let err = interp.interpret_line("dyn gety").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnknownCommand { .. }));
}

#[test]
fn dictionaries_are_shared_by_reference() {
    let interp = run("/d 4 dict def d begin /k 9 def end d length");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(1)]);
}

#[test]
fn zero_capacity_dictionary_rejects_definitions() {
    let mut interp = session();
    let err = interp
        .interpret_source("0 dict begin /x 1 def")
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::CapacityExceeded { capacity: 0 });
}

#[test]
fn capacity_allows_overwriting_existing_key() {
    let interp = run("1 dict begin /x 1 def /x 2 def x end");
    assert_eq!(interp.stack().as_slice(), &[Value::Int(2)]);
}
