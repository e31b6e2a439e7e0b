//! RAII guard for procedure call frames.
//!
//! Entering a frame pushes it on the call stack; dropping the guard pops
//! it, on success, on error and during unwinding alike. The guard derefs
//! to the interpreter, so the body runs through it directly.
//!
//! ```text
//! let mut scoped = interpreter.enter_frame(frame)?;
//! scoped.run_body(&procedure)?;
//! // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use psi_value::EvalResult;

use super::Interpreter;
use crate::call_stack::CallFrame;

pub struct FrameGuard<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.interpreter.call_stack.pop();
    }
}

impl Deref for FrameGuard<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push `frame`, failing with `RecursionLimit` past the configured depth.
    pub fn enter_frame(&mut self, frame: CallFrame) -> EvalResult<FrameGuard<'_>> {
        self.call_stack.push(frame)?;
        Ok(FrameGuard { interpreter: self })
    }
}
