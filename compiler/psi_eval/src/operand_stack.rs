//! The operand stack.
//!
//! Every operator reads its operands from here and writes its results back.
//! Operators that need several operands check the depth with
//! [`OperandStack::require`] before popping, so an underflow leaves the
//! stack untouched.

use std::rc::Rc;

use psi_value::{
    index_out_of_range, stack_underflow, type_mismatch, DictRef, EvalResult, ProcRef, Value,
};

/// LIFO store of values; the last element is the top.
#[derive(Clone, Debug, Default)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value as-is.
    ///
    /// Tagged values keep their tag, so a `Real` produced by `div` stays
    /// real. Untyped numeric results go through [`Self::push_number`].
    #[inline]
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Push a numeric result, canonicalised to `Int` when whole.
    #[inline]
    pub fn push_number(&mut self, x: f64) {
        self.values.push(Value::number(x));
    }

    pub fn pop(&mut self, operator: &'static str) -> EvalResult<Value> {
        self.values
            .pop()
            .ok_or_else(|| stack_underflow(operator, 1, 0))
    }

    pub fn peek(&self, operator: &'static str) -> EvalResult<&Value> {
        self.values
            .last()
            .ok_or_else(|| stack_underflow(operator, 1, 0))
    }

    /// Fail with `StackUnderflow` unless at least `needed` values are present.
    #[inline]
    pub fn require(&self, operator: &'static str, needed: usize) -> EvalResult {
        if self.values.len() < needed {
            return Err(stack_underflow(operator, needed, self.values.len()));
        }
        Ok(())
    }

    /// `exch`: swap the top two values.
    pub fn exchange(&mut self) -> EvalResult {
        self.require("exch", 2)?;
        let len = self.values.len();
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    /// `dup`: push a copy of the top value.
    pub fn duplicate(&mut self) -> EvalResult {
        let top = self.peek("dup")?.clone();
        self.values.push(top);
        Ok(())
    }

    /// `copy`: pop an integer `n` and duplicate the top `n` values,
    /// preserving their order.
    ///
    /// ```text
    /// a b c 3 copy  =>  a b c a b c
    /// ```
    pub fn copy_top(&mut self) -> EvalResult {
        let n = self.pop_int("copy")?;
        let Ok(count) = usize::try_from(n) else {
            return Err(index_out_of_range("copy", n, self.values.len()));
        };
        self.require("copy", count)?;
        let start = self.values.len() - count;
        self.values.extend_from_within(start..);
        Ok(())
    }

    /// `clear`: drop everything.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Current depth.
    #[inline]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Contents from bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    // Typed pops. The value is consumed even when its type is wrong.

    pub fn pop_int(&mut self, operator: &'static str) -> EvalResult<i64> {
        match self.pop(operator)? {
            Value::Int(n) => Ok(n),
            other => Err(type_mismatch(operator, "integer", &other)),
        }
    }

    /// Pop an `Int` or `Real`, returning it still tagged.
    pub fn pop_number(&mut self, operator: &'static str) -> EvalResult<Value> {
        let value = self.pop(operator)?;
        if value.is_number() {
            Ok(value)
        } else {
            Err(type_mismatch(operator, "number", &value))
        }
    }

    pub fn pop_bool(&mut self, operator: &'static str) -> EvalResult<bool> {
        match self.pop(operator)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(operator, "boolean", &other)),
        }
    }

    pub fn pop_proc(&mut self, operator: &'static str) -> EvalResult<ProcRef> {
        match self.pop(operator)? {
            Value::Proc(p) => Ok(p),
            other => Err(type_mismatch(operator, "procedure", &other)),
        }
    }

    pub fn pop_dict(&mut self, operator: &'static str) -> EvalResult<DictRef> {
        match self.pop(operator)? {
            Value::Dict(d) => Ok(d),
            other => Err(type_mismatch(operator, "dict", &other)),
        }
    }

    /// Pop a `Text` or `Name`.
    pub fn pop_string(&mut self, operator: &'static str) -> EvalResult<Rc<str>> {
        let value = self.pop(operator)?;
        value
            .as_key()
            .ok_or_else(|| type_mismatch(operator, "string", &value))
    }
}
