//! Control flow: `if`, `ifelse`, `for`, `repeat`.
//!
//! Bodies run synchronously as anonymous call frames. `quit` only sets the
//! terminated flag; loops check it at iteration boundaries, so a `quit`
//! deep inside a body takes effect when control next reaches one.

use psi_value::{EvalResult, Value};

use super::Interpreter;

impl Interpreter {
    /// `bool proc if`
    pub(crate) fn op_if(&mut self) -> EvalResult {
        self.stack.require("if", 2)?;
        let body = self.stack.pop_proc("if")?;
        let condition = self.stack.pop_bool("if")?;
        if condition {
            self.run_procedure(body, None)?;
        }
        Ok(())
    }

    /// `bool then else ifelse`
    pub(crate) fn op_ifelse(&mut self) -> EvalResult {
        self.stack.require("ifelse", 3)?;
        let otherwise = self.stack.pop_proc("ifelse")?;
        let then = self.stack.pop_proc("ifelse")?;
        let condition = self.stack.pop_bool("ifelse")?;
        let branch = if condition { then } else { otherwise };
        self.run_procedure(branch, None)
    }

    /// `start increment end proc for`
    ///
    /// The counter is kept as a double and pushed truncated before each
    /// run. A negative increment counts down. A zero increment never
    /// terminates on its own.
    pub(crate) fn op_for(&mut self) -> EvalResult {
        self.stack.require("for", 4)?;
        let body = self.stack.pop_proc("for")?;
        let end = self.pop_f64("for")?;
        let increment = self.pop_f64("for")?;
        let start = self.pop_f64("for")?;

        let mut i = start;
        while if increment >= 0.0 { i <= end } else { i >= end } {
            self.stack.push_number(i.trunc());
            self.run_procedure(body.clone(), None)?;
            if self.terminated {
                break;
            }
            i += increment;
        }
        Ok(())
    }

    /// `count proc repeat`
    pub(crate) fn op_repeat(&mut self) -> EvalResult {
        self.stack.require("repeat", 2)?;
        let body = self.stack.pop_proc("repeat")?;
        let count = self.stack.pop_int("repeat")?;
        for _ in 0..count.max(0) {
            if self.terminated {
                break;
            }
            self.run_procedure(body.clone(), None)?;
        }
        Ok(())
    }

    fn pop_f64(&mut self, operator: &'static str) -> EvalResult<f64> {
        let value = self.stack.pop_number(operator)?;
        Ok(value.as_f64().unwrap_or(f64::NAN))
    }
}
