use super::*;
use pretty_assertions::assert_eq;
use psi_value::EvalErrorKind;

fn run(values: &[Value], op: fn(&mut OperandStack) -> EvalResult) -> EvalResult<Vec<Value>> {
    let mut stack = OperandStack::new();
    for v in values {
        stack.push(v.clone());
    }
    op(&mut stack)?;
    Ok(stack.as_slice().to_vec())
}

fn top(values: &[Value], op: fn(&mut OperandStack) -> EvalResult) -> Value {
    run(values, op).unwrap().pop().unwrap()
}

fn kind(values: &[Value], op: fn(&mut OperandStack) -> EvalResult) -> EvalErrorKind {
    run(values, op).unwrap_err().kind
}

#[test]
fn test_add_integers() {
    assert_eq!(top(&[Value::int(2), Value::int(2)], add), Value::Int(4));
}

#[test]
fn test_add_mixed_whole_is_integer() {
    assert_eq!(top(&[Value::real(2.0), Value::int(1)], add), Value::Int(3));
}

#[test]
fn test_add_fractional_is_real() {
    assert_eq!(top(&[Value::real(2.5), Value::real(0.5)], add), Value::Real(3.0));
    assert_eq!(top(&[Value::real(1.5), Value::int(1)], add), Value::Real(2.5));
}

#[test]
fn test_sub_order_is_second_minus_first() {
    assert_eq!(top(&[Value::int(10), Value::int(3)], sub), Value::Int(7));
}

#[test]
fn test_mul() {
    assert_eq!(top(&[Value::int(6), Value::int(7)], mul), Value::Int(42));
    assert_eq!(top(&[Value::real(0.5), Value::int(3)], mul), Value::Real(1.5));
}

#[test]
fn test_integer_overflow_promotes_to_real() {
    let result = top(&[Value::int(i64::MAX), Value::int(1)], add);
    assert!(matches!(result, Value::Real(_)));
    let result = top(&[Value::int(i64::MIN), Value::int(-1)], idiv);
    assert!(matches!(result, Value::Real(_)));
}

#[test]
fn test_div_is_always_real() {
    assert_eq!(top(&[Value::int(4), Value::int(2)], div), Value::Real(2.0));
    assert_eq!(top(&[Value::int(1), Value::int(4)], div), Value::Real(0.25));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(
        kind(&[Value::int(4), Value::int(0)], div),
        EvalErrorKind::DivisionByZero { operator: "div" }
    );
    assert_eq!(
        kind(&[Value::int(4), Value::real(0.0)], div),
        EvalErrorKind::DivisionByZero { operator: "div" }
    );
}

#[test]
fn test_idiv_and_mod() {
    assert_eq!(top(&[Value::int(7), Value::int(2)], idiv), Value::Int(3));
    assert_eq!(top(&[Value::int(-7), Value::int(2)], idiv), Value::Int(-3));
    assert_eq!(top(&[Value::int(7), Value::int(3)], modulo), Value::Int(1));
    assert_eq!(top(&[Value::int(-7), Value::int(3)], modulo), Value::Int(-1));
}

#[test]
fn test_idiv_rejects_whole_real() {
    assert_eq!(
        kind(&[Value::real(4.0), Value::int(2)], idiv),
        EvalErrorKind::TypeMismatch {
            operator: "idiv",
            expected: "integer",
            got: "real"
        }
    );
}

#[test]
fn test_idiv_and_mod_by_zero() {
    assert_eq!(
        kind(&[Value::int(4), Value::int(0)], idiv),
        EvalErrorKind::DivisionByZero { operator: "idiv" }
    );
    assert_eq!(
        kind(&[Value::int(4), Value::int(0)], modulo),
        EvalErrorKind::DivisionByZero { operator: "mod" }
    );
}

#[test]
fn test_abs_and_neg_keep_tag() {
    assert_eq!(top(&[Value::int(-3)], abs), Value::Int(3));
    assert_eq!(top(&[Value::real(-3.0)], abs), Value::Real(3.0));
    assert_eq!(top(&[Value::int(3)], neg), Value::Int(-3));
    assert_eq!(top(&[Value::real(2.5)], neg), Value::Real(-2.5));
}

#[test]
fn test_rounding_produces_integers() {
    assert_eq!(top(&[Value::real(2.1)], ceiling), Value::Int(3));
    assert_eq!(top(&[Value::real(2.9)], floor), Value::Int(2));
    assert_eq!(top(&[Value::real(-2.1)], floor), Value::Int(-3));
    assert_eq!(top(&[Value::real(2.5)], round), Value::Int(3));
    assert_eq!(top(&[Value::real(-2.5)], round), Value::Int(-2));
    assert_eq!(top(&[Value::int(5)], round), Value::Int(5));
}

#[test]
fn test_round_is_exact_near_half() {
    assert_eq!(top(&[Value::real(0.499_999_999_999_999_94)], round), Value::Int(0));
    assert_eq!(top(&[Value::real(-0.5)], round), Value::Int(0));
    assert_eq!(
        top(&[Value::real(4_503_599_627_370_497.0)], round),
        Value::Int(4_503_599_627_370_497)
    );
    assert_eq!(
        top(&[Value::int(9_007_199_254_740_994), Value::int(2)], div),
        Value::Real(4_503_599_627_370_497.0)
    );
}

#[test]
fn test_sqrt() {
    assert_eq!(top(&[Value::int(4)], sqrt), Value::Real(2.0));
    assert_eq!(
        kind(&[Value::int(-4)], sqrt),
        EvalErrorKind::DomainError {
            operator: "sqrt",
            operand: "-4".to_owned()
        }
    );
}

#[test]
fn test_underflow_leaves_stack_intact() {
    let mut stack = OperandStack::new();
    stack.push(1_i64);
    assert!(add(&mut stack).is_err());
    assert_eq!(stack.as_slice(), &[Value::Int(1)]);
}

#[test]
fn test_non_number_operand() {
    assert_eq!(
        kind(&[Value::text("a"), Value::int(1)], add),
        EvalErrorKind::TypeMismatch {
            operator: "add",
            expected: "number",
            got: "string"
        }
    );
}
