//! String operators.
//!
//! Strings are indexed by character. Text and names are both accepted as
//! string operands; results are always text.

use psi_value::{index_out_of_range, type_mismatch, EvalResult, Value};

use crate::OperandStack;

/// `length`: entry count of a dictionary, character count of a string.
pub fn length(stack: &mut OperandStack) -> EvalResult {
    let value = stack.pop("length")?;
    let len = match &value {
        Value::Dict(dict) => dict.len(),
        other => match other.as_str() {
            Some(s) => s.chars().count(),
            None => return Err(type_mismatch("length", "string or dict", other)),
        },
    };
    stack.push(len_to_int(len));
    Ok(())
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "string and dictionary sizes are far below i64::MAX"
)]
fn len_to_int(len: usize) -> i64 {
    len as i64
}

/// Index operand of `get`: an integer, or a text numeral.
fn pop_index(stack: &mut OperandStack) -> EvalResult<i64> {
    let value = stack.pop("get")?;
    match &value {
        Value::Int(n) => Ok(*n),
        Value::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| type_mismatch("get", "integer", &value)),
        other => Err(type_mismatch("get", "integer", other)),
    }
}

/// `string index get`: the character at `index`, as one-character text.
pub fn get(stack: &mut OperandStack) -> EvalResult {
    stack.require("get", 2)?;
    let index = pop_index(stack)?;
    let string = stack.pop_string("get")?;
    let len = string.chars().count();
    let ch = usize::try_from(index)
        .ok()
        .and_then(|i| string.chars().nth(i))
        .ok_or_else(|| index_out_of_range("get", index, len))?;
    stack.push(Value::text(ch.to_string()));
    Ok(())
}

/// Character range `[start, start + count)` of `s`, checked against its
/// length. A negative start is reported as-is, an overlong range by its end.
fn char_range(
    operator: &'static str,
    s: &str,
    start: i64,
    count: i64,
) -> EvalResult<(usize, usize)> {
    let len = s.chars().count();
    let index = if start < 0 {
        start
    } else {
        start.saturating_add(count)
    };
    let out_of_range = || index_out_of_range(operator, index, len);
    let start = usize::try_from(start).map_err(|_| out_of_range())?;
    let count = usize::try_from(count).map_err(|_| out_of_range())?;
    match start.checked_add(count) {
        Some(end) if end <= len => Ok((start, end)),
        _ => Err(out_of_range()),
    }
}

/// `string start count getinterval`
pub fn getinterval(stack: &mut OperandStack) -> EvalResult {
    stack.require("getinterval", 3)?;
    let count = stack.pop_int("getinterval")?;
    let start = stack.pop_int("getinterval")?;
    let string = stack.pop_string("getinterval")?;
    let (from, to) = char_range("getinterval", &string, start, count)?;
    let slice: String = string.chars().skip(from).take(to - from).collect();
    stack.push(Value::text(slice));
    Ok(())
}

/// `string start substring putinterval`: `string` with the characters
/// from `start` overwritten by `substring`.
pub fn putinterval(stack: &mut OperandStack) -> EvalResult {
    stack.require("putinterval", 3)?;
    let replacement = stack.pop_string("putinterval")?;
    let start = stack.pop_int("putinterval")?;
    let target = stack.pop_string("putinterval")?;
    let count = len_to_int(replacement.chars().count());
    let (from, to) = char_range("putinterval", &target, start, count)?;

    let mut result = String::with_capacity(target.len() + replacement.len());
    result.extend(target.chars().take(from));
    result.push_str(&replacement);
    result.extend(target.chars().skip(to));
    stack.push(Value::text(result));
    Ok(())
}
