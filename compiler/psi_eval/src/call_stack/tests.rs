use super::*;
use pretty_assertions::assert_eq;
use psi_value::{unknown_command, EvalErrorKind};

fn frame(name: Option<&str>) -> CallFrame {
    CallFrame {
        name: name.map(str::to_owned),
        procedure: ProcRef::new(Vec::new()),
    }
}

#[test]
fn test_push_pop_tracks_current() {
    let mut stack = CallStack::new(None);
    assert!(stack.current().is_none());

    let outer = frame(Some("outer"));
    let outer_proc = outer.procedure.clone();
    stack.push(outer).unwrap();
    let inner = frame(None);
    let inner_proc = inner.procedure.clone();
    stack.push(inner).unwrap();

    assert_eq!(stack.depth(), 2);
    assert!(stack.current().unwrap().ptr_eq(&inner_proc));
    stack.pop();
    assert!(stack.current().unwrap().ptr_eq(&outer_proc));
}

#[test]
fn test_depth_limit() {
    let mut stack = CallStack::new(Some(2));
    stack.push(frame(None)).unwrap();
    stack.push(frame(None)).unwrap();
    let err = stack.push(frame(None)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 2 });
    assert_eq!(stack.depth(), 2);
}

#[test]
fn test_capture_is_innermost_first() {
    let mut stack = CallStack::default();
    stack.push(frame(Some("outer"))).unwrap();
    stack.push(frame(None)).unwrap();
    let names: Vec<_> = stack
        .capture()
        .frames()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(names, vec!["<anonymous>", "outer"]);
}

#[test]
fn test_attach_keeps_first_backtrace() {
    let mut stack = CallStack::default();
    stack.push(frame(Some("a"))).unwrap();
    let err = stack.attach_backtrace(unknown_command("x"));
    stack.push(frame(Some("b"))).unwrap();
    let err = stack.attach_backtrace(err);
    assert_eq!(err.backtrace.unwrap().len(), 1);
}

#[test]
fn test_attach_on_empty_stack_is_noop() {
    let stack = CallStack::default();
    assert!(stack.attach_backtrace(unknown_command("x")).backtrace.is_none());
}
