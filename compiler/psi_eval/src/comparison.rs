//! Comparison and boolean operators.
//!
//! Numbers compare numerically across `Int`/`Real`, string-like values
//! (text and names) compare lexicographically, and anything else is a
//! type mismatch. Only `eq` and `ne` accept a pair of booleans.

use std::cmp::Ordering;

use psi_value::{type_mismatch, EvalResult, Value};

use crate::OperandStack;

/// Order two operands, `a` being the deeper one.
fn compare(operator: &'static str, a: &Value, b: &Value) -> EvalResult<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(x.cmp(y)),
        _ if a.is_number() => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => Ok(x.total_cmp(&y)),
            _ => Err(type_mismatch(operator, "number", b)),
        },
        _ => match (a.as_str(), b.as_str()) {
            (Some(x), Some(y)) => Ok(x.cmp(y)),
            (Some(_), None) => Err(type_mismatch(operator, "string", b)),
            _ => Err(type_mismatch(operator, "number or string", a)),
        },
    }
}

fn pop_pair(stack: &mut OperandStack, operator: &'static str) -> EvalResult<(Value, Value)> {
    stack.require(operator, 2)?;
    let b = stack.pop(operator)?;
    let a = stack.pop(operator)?;
    Ok((a, b))
}

fn equality(stack: &mut OperandStack, operator: &'static str) -> EvalResult<bool> {
    let (a, b) = pop_pair(stack, operator)?;
    match (&a, &b) {
        (Value::Bool(x), Value::Bool(y)) => Ok(x == y),
        _ => Ok(compare(operator, &a, &b)? == Ordering::Equal),
    }
}

pub fn eq(stack: &mut OperandStack) -> EvalResult {
    let equal = equality(stack, "eq")?;
    stack.push(equal);
    Ok(())
}

pub fn ne(stack: &mut OperandStack) -> EvalResult {
    let equal = equality(stack, "ne")?;
    stack.push(!equal);
    Ok(())
}

fn ordered(
    stack: &mut OperandStack,
    operator: &'static str,
    test: fn(Ordering) -> bool,
) -> EvalResult {
    let (a, b) = pop_pair(stack, operator)?;
    let holds = test(compare(operator, &a, &b)?);
    stack.push(holds);
    Ok(())
}

pub fn gt(stack: &mut OperandStack) -> EvalResult {
    ordered(stack, "gt", Ordering::is_gt)
}

pub fn lt(stack: &mut OperandStack) -> EvalResult {
    ordered(stack, "lt", Ordering::is_lt)
}

pub fn ge(stack: &mut OperandStack) -> EvalResult {
    ordered(stack, "ge", Ordering::is_ge)
}

pub fn le(stack: &mut OperandStack) -> EvalResult {
    ordered(stack, "le", Ordering::is_le)
}

/// Integer view used by the bitwise forms; reals are truncated.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bitwise operators work on the truncated integer value"
)]
fn bits(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Real(x) => Some(*x as i64),
        _ => None,
    }
}

fn logical(
    stack: &mut OperandStack,
    operator: &'static str,
    on_bool: fn(bool, bool) -> bool,
    on_bits: fn(i64, i64) -> i64,
) -> EvalResult {
    let (a, b) = pop_pair(stack, operator)?;
    let result = match (&a, &b) {
        (Value::Bool(x), Value::Bool(y)) => Value::Bool(on_bool(*x, *y)),
        (Value::Bool(_), other) => return Err(type_mismatch(operator, "boolean", other)),
        _ => match (bits(&a), bits(&b)) {
            (Some(x), Some(y)) => Value::Int(on_bits(x, y)),
            (Some(_), None) => return Err(type_mismatch(operator, "number", &b)),
            (None, _) => return Err(type_mismatch(operator, "boolean or number", &a)),
        },
    };
    stack.push(result);
    Ok(())
}

pub fn and(stack: &mut OperandStack) -> EvalResult {
    logical(stack, "and", |x, y| x && y, |x, y| x & y)
}

pub fn or(stack: &mut OperandStack) -> EvalResult {
    logical(stack, "or", |x, y| x || y, |x, y| x | y)
}

pub fn not(stack: &mut OperandStack) -> EvalResult {
    let value = stack.pop("not")?;
    let result = match &value {
        Value::Bool(b) => Value::Bool(!b),
        other => match bits(other) {
            Some(n) => Value::Int(!n),
            None => return Err(type_mismatch("not", "boolean or number", other)),
        },
    };
    stack.push(result);
    Ok(())
}
