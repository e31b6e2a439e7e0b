//! End-to-end programs: stack manipulation, arithmetic, strings, loops and
//! output, run through `Interpreter::interpret_source`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use psi_eval::{buffer_handler, EvalErrorKind, Interpreter, InterpreterBuilder, Value};

fn session() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn stack_after(src: &str) -> Vec<Value> {
    let mut interp = session();
    interp.interpret_source(src).unwrap();
    interp.stack().as_slice().to_vec()
}

fn error_of(src: &str) -> EvalErrorKind {
    session().interpret_source(src).unwrap_err().kind
}

fn output_of(src: &str) -> String {
    let mut interp = session();
    interp.interpret_source(src).unwrap();
    interp.print_handler().get_output()
}

#[test]
fn copy_duplicates_top_n() {
    assert_eq!(
        stack_after("1 2 3 3 copy"),
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(1),
            Value::Int(2),
            Value::Int(3)
        ]
    );
}

#[test]
fn exch_pop_dup_clear() {
    assert_eq!(stack_after("1 2 exch"), vec![Value::Int(2), Value::Int(1)]);
    assert_eq!(stack_after("1 2 pop dup"), vec![Value::Int(1), Value::Int(1)]);
    assert_eq!(stack_after("1 2 3 clear count"), vec![Value::Int(0)]);
}

#[test]
fn arithmetic_result_types() {
    assert_eq!(stack_after("2 2 add"), vec![Value::Int(4)]);
    assert_eq!(stack_after("4 2 div"), vec![Value::Real(2.0)]);
    assert_eq!(stack_after("4 sqrt"), vec![Value::Real(2.0)]);
    assert_eq!(stack_after("7 2 idiv 7 2 mod"), vec![Value::Int(3), Value::Int(1)]);
    assert_eq!(stack_after("3.7 floor 3.2 ceiling"), vec![Value::Int(3), Value::Int(4)]);
}

#[test]
fn arithmetic_errors() {
    assert_eq!(error_of("1 0 div"), EvalErrorKind::DivisionByZero { operator: "div" });
    assert!(matches!(error_of("-4 sqrt"), EvalErrorKind::DomainError { .. }));
    assert!(matches!(
        error_of("4 2 div 1 idiv"),
        EvalErrorKind::TypeMismatch { operator: "idiv", .. }
    ));
    assert!(matches!(error_of("1 add"), EvalErrorKind::StackUnderflow { .. }));
}

#[test]
fn string_operators() {
    assert_eq!(stack_after("(Test) 0 2 getinterval"), vec![Value::text("Te")]);
    assert_eq!(stack_after("(Test) 1 (ro) putinterval"), vec![Value::text("Trot")]);
    assert_eq!(stack_after("(Test) length"), vec![Value::Int(4)]);
    assert_eq!(stack_after("(Test) (2) get"), vec![Value::text("s")]);
    assert!(matches!(
        error_of("(Test) 2 5 getinterval"),
        EvalErrorKind::IndexOutOfRange { .. }
    ));
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(
        stack_after("1 2 lt (a) (b) gt true false or 6 3 and"),
        vec![
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(true),
            Value::Int(2)
        ]
    );
    assert_eq!(stack_after("1 1 ne"), vec![Value::Bool(false)]);
}

#[test]
fn for_loop_sums() {
    assert_eq!(stack_after("0 0 1 4 { add } for"), vec![Value::Int(10)]);
}

#[test]
fn repeat_counts() {
    assert_eq!(stack_after("0 5 { 1 add } repeat"), vec![Value::Int(5)]);
    assert_eq!(stack_after("0 0 { 1 add } repeat"), vec![Value::Int(0)]);
}

#[test]
fn recursive_factorial() {
    let src = "
        /fact {
          dup 1 le
            { pop 1 }
            { dup 1 sub fact mul }
          ifelse
        } def
        10 fact
    ";
    assert_eq!(stack_after(src), vec![Value::Int(3_628_800)]);
}

#[test]
fn quit_inside_nested_procedure_stops_enclosing_loop() {
    let mut interp = session();
    interp
        .interpret_source("/stop { quit } def\n0 10 { 1 add dup 4 eq { stop } if } repeat\n99")
        .unwrap();
    assert!(interp.is_terminated());
    assert_eq!(interp.stack().as_slice(), &[Value::Int(4)]);
}

#[test]
fn output_forms() {
    assert_eq!(
        output_of("42 print (s) print (s) = /n == 2.5 = 1 dict == { 1 } ="),
        "42\ns\n(s)\n/n\n2.5\n-dict- contains 0 elements\n-procedure-\n"
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let mut interp = session();
    assert!(interp.interpret_line("1 0 div").is_err());
    interp.interpret_line("2 3 add").unwrap();
    assert_eq!(interp.stack().as_slice().last(), Some(&Value::Int(5)));
}

proptest! {
    #[test]
    fn whole_literals_are_integers(n in -1_000_000i64..1_000_000) {
        let stack = stack_after(&format!("{n}.0 {n}"));
        prop_assert_eq!(stack, vec![Value::Int(n), Value::Int(n)]);
    }

    #[test]
    fn fractional_literals_are_reals(n in -1_000i64..1_000, frac in 1u32..10) {
        let src = format!("{n}.{frac}");
        let stack = stack_after(&src);
        prop_assert!(matches!(stack.as_slice(), [Value::Real(_)]));
    }

    #[test]
    fn add_then_sub_is_identity(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let stack = stack_after(&format!("{a} {b} add {b} sub"));
        prop_assert_eq!(stack, vec![Value::Int(a)]);
    }
}
