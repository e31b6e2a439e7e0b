//! Script execution through the front end.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use psi::commands::run_script;
use psi_eval::{buffer_handler, EvalErrorKind, InterpreterBuilder, Value};

fn interpreter() -> psi_eval::Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

#[test]
fn script_output_is_captured() {
    let mut interp = interpreter();
    let script = "
        /square { dup mul } def
        1 1 3 { square = } for
        (done) print
    ";
    run_script(&mut interp, script).unwrap();
    assert_eq!(interp.print_handler().get_output(), "1\n4\n9\ndone\n");
}

#[test]
fn script_stops_at_first_error() {
    let mut interp = interpreter();
    let err = run_script(&mut interp, "1\n2 bogus\n3").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownCommand {
            token: "bogus".to_owned()
        }
    );
    assert_eq!(interp.stack().as_slice(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn script_ending_inside_procedure_is_malformed() {
    let mut interp = interpreter();
    let err = run_script(&mut interp, "/f {\n 1 2 add\n").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::MalformedProcedure { .. }));
}

#[test]
fn script_stops_at_quit() {
    let mut interp = interpreter();
    run_script(&mut interp, "(a) print\nquit\n(b) print").unwrap();
    assert_eq!(interp.print_handler().get_output(), "a\n");
}
