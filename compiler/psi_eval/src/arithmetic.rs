//! Arithmetic operators.
//!
//! Binary operators pop the right operand first (it is on top), so
//! `10 3 sub` computes `10 - 3`.
//!
//! # Result types
//!
//! | operator                     | result                                |
//! |------------------------------|---------------------------------------|
//! | `add` `sub` `mul`            | integer when both operands are whole  |
//! | `div` `sqrt`                 | always real                           |
//! | `idiv` `mod`                 | integer, integer operands required    |
//! | `abs` `neg`                  | same tag as the operand               |
//! | `ceiling` `floor` `round`    | integer                               |
//!
//! Integer arithmetic is exact. When it would overflow `i64` the result is
//! computed in `f64` and pushed as a real instead of wrapping.

use psi_value::{
    division_by_zero, domain_error, is_whole, type_mismatch, EvalResult, Value,
};

use crate::OperandStack;

/// Numeric view of a popped operand.
#[derive(Clone, Copy)]
enum Num {
    Int(i64),
    Real(f64),
}

impl Num {
    fn from_value(operator: &'static str, value: &Value) -> EvalResult<Num> {
        match value {
            Value::Int(n) => Ok(Num::Int(*n)),
            Value::Real(x) => Ok(Num::Real(*x)),
            other => Err(type_mismatch(operator, "number", other)),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed arithmetic is done in f64"
    )]
    fn to_f64(self) -> f64 {
        match self {
            Num::Int(n) => n as f64,
            Num::Real(x) => x,
        }
    }

    fn is_whole(self) -> bool {
        match self {
            Num::Int(_) => true,
            Num::Real(x) => is_whole(x),
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Num::Int(n) => n == 0,
            Num::Real(x) => x == 0.0,
        }
    }
}

/// Pop `a b` (b on top) as numbers.
fn pop_pair(stack: &mut OperandStack, operator: &'static str) -> EvalResult<(Num, Num)> {
    stack.require(operator, 2)?;
    let b = stack.pop(operator)?;
    let a = stack.pop(operator)?;
    Ok((Num::from_value(operator, &a)?, Num::from_value(operator, &b)?))
}

fn pop_one(stack: &mut OperandStack, operator: &'static str) -> EvalResult<Num> {
    let value = stack.pop(operator)?;
    Num::from_value(operator, &value)
}

/// Shared shape of `add`, `sub` and `mul`.
fn combine(
    stack: &mut OperandStack,
    operator: &'static str,
    exact: fn(i64, i64) -> Option<i64>,
    approx: fn(f64, f64) -> f64,
) -> EvalResult {
    let (a, b) = pop_pair(stack, operator)?;
    let result = match (a, b) {
        (Num::Int(x), Num::Int(y)) => match exact(x, y) {
            Some(n) => Value::Int(n),
            None => Value::real(approx(a.to_f64(), b.to_f64())),
        },
        _ if a.is_whole() && b.is_whole() => Value::number(approx(a.to_f64(), b.to_f64())),
        _ => Value::real(approx(a.to_f64(), b.to_f64())),
    };
    stack.push(result);
    Ok(())
}

pub fn add(stack: &mut OperandStack) -> EvalResult {
    combine(stack, "add", i64::checked_add, |a, b| a + b)
}

pub fn sub(stack: &mut OperandStack) -> EvalResult {
    combine(stack, "sub", i64::checked_sub, |a, b| a - b)
}

pub fn mul(stack: &mut OperandStack) -> EvalResult {
    combine(stack, "mul", i64::checked_mul, |a, b| a * b)
}

pub fn div(stack: &mut OperandStack) -> EvalResult {
    let (a, b) = pop_pair(stack, "div")?;
    if b.is_zero() {
        return Err(division_by_zero("div"));
    }
    stack.push(Value::real(a.to_f64() / b.to_f64()));
    Ok(())
}

fn pop_int_pair(stack: &mut OperandStack, operator: &'static str) -> EvalResult<(i64, i64)> {
    stack.require(operator, 2)?;
    let b = stack.pop_int(operator)?;
    let a = stack.pop_int(operator)?;
    if b == 0 {
        return Err(division_by_zero(operator));
    }
    Ok((a, b))
}

/// Truncating integer division.
pub fn idiv(stack: &mut OperandStack) -> EvalResult {
    let (a, b) = pop_int_pair(stack, "idiv")?;
    match a.checked_div(b) {
        Some(q) => stack.push(q),
        // i64::MIN / -1
        None => stack.push(Value::real(-(Num::Int(a).to_f64()))),
    }
    Ok(())
}

/// Remainder with the sign of the dividend.
pub fn modulo(stack: &mut OperandStack) -> EvalResult {
    let (a, b) = pop_int_pair(stack, "mod")?;
    stack.push(a.wrapping_rem(b));
    Ok(())
}

pub fn abs(stack: &mut OperandStack) -> EvalResult {
    let result = match pop_one(stack, "abs")? {
        Num::Int(n) => n
            .checked_abs()
            .map_or_else(|| Value::real(Num::Int(n).to_f64().abs()), Value::Int),
        Num::Real(x) => Value::real(x.abs()),
    };
    stack.push(result);
    Ok(())
}

pub fn neg(stack: &mut OperandStack) -> EvalResult {
    let result = match pop_one(stack, "neg")? {
        Num::Int(n) => n
            .checked_neg()
            .map_or_else(|| Value::real(-Num::Int(n).to_f64()), Value::Int),
        Num::Real(x) => Value::real(-x),
    };
    stack.push(result);
    Ok(())
}

/// Shared shape of `ceiling`, `floor` and `round`.
///
/// Integers pass through. Reals are rounded and canonicalised, so they
/// come out as integers unless they are not finite or exceed `i64`.
fn to_integral(stack: &mut OperandStack, operator: &'static str, f: fn(f64) -> f64) -> EvalResult {
    let result = match pop_one(stack, operator)? {
        Num::Int(n) => Value::Int(n),
        Num::Real(x) => Value::number(f(x)),
    };
    stack.push(result);
    Ok(())
}

pub fn ceiling(stack: &mut OperandStack) -> EvalResult {
    to_integral(stack, "ceiling", f64::ceil)
}

pub fn floor(stack: &mut OperandStack) -> EvalResult {
    to_integral(stack, "floor", f64::floor)
}

/// Half-up: `2.5 round` is 3, `-2.5 round` is -2.
pub fn round(stack: &mut OperandStack) -> EvalResult {
    to_integral(stack, "round", round_half_up)
}

/// `x + 0.5` can itself round, so compare the exact fractional part.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn sqrt(stack: &mut OperandStack) -> EvalResult {
    let value = stack.pop("sqrt")?;
    let x = Num::from_value("sqrt", &value)?.to_f64();
    if x < 0.0 {
        return Err(domain_error("sqrt", &value));
    }
    stack.push(Value::real(x.sqrt()));
    Ok(())
}

#[cfg(test)]
mod tests;
