//! Procedure call frames.
//!
//! The top frame is the "currently executing procedure" consulted by
//! lexical resolution. Frames are pushed and popped by the interpreter's
//! frame guard, so the enclosing procedure is restored however a call
//! ends.

use psi_value::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError, ProcRef};

/// Default nesting limit for procedure calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// One running procedure.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// Name the procedure was looked up under; `None` for bodies run by
    /// `if`, `ifelse`, `for` and `repeat`.
    pub name: Option<String>,
    pub procedure: ProcRef,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, or fail with `RecursionLimit` without pushing.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop on empty call stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The procedure whose body is running, if any.
    #[inline]
    pub fn current(&self) -> Option<&ProcRef> {
        self.frames.last().map(|frame| &frame.procedure)
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot the live frames, innermost first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|frame| BacktraceFrame {
                name: frame
                    .name
                    .clone()
                    .unwrap_or_else(|| "<anonymous>".to_owned()),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach the current backtrace to `err` unless it already has one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}

#[cfg(test)]
mod tests;
