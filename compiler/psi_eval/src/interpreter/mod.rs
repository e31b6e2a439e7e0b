//! The interpreter session.
//!
//! One `Interpreter` owns every piece of mutable state: the operand stack,
//! the dictionary stack and scope mode, the procedure builder, the call
//! stack and the terminated flag. There are no globals.
//!
//! # Execution
//!
//! ```text
//! line -> lex -> ProcedureBuilder::feed -> Complete(proc) -> push
//!                                       -> Dispatch(tok)  -> dispatch()
//! ```
//!
//! Procedure bodies go through the same path with a fresh builder per
//! execution, so a literal nested inside a body is pushed, not run.

mod builder;
mod dispatch;
mod flow;
mod frame_guard;
mod operators;

pub use builder::InterpreterBuilder;
pub use frame_guard::FrameGuard;

use psi_lexer::{lex, Token};
use psi_value::{malformed_procedure, EvalResult, ProcRef};
use tracing::trace;

use crate::call_stack::{CallFrame, CallStack};
use crate::dictionary_stack::{DictionaryStack, ScopeMode};
use crate::print_handler::SharedPrintHandler;
use crate::procedure_builder::{Feed, ProcedureBuilder};
use crate::stack::ensure_sufficient_stack;
use crate::OperandStack;

pub struct Interpreter {
    pub(crate) stack: OperandStack,
    pub(crate) dictionaries: DictionaryStack,
    /// Top-level capture state; survives between lines.
    builder: ProcedureBuilder,
    pub(crate) call_stack: CallStack,
    /// Set by `quit`, never cleared.
    terminated: bool,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// A session with default settings, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run one line of input.
    ///
    /// On error the partial procedure literal (if any) is discarded; the
    /// operand stack keeps whatever the line did before failing.
    pub fn interpret_line(&mut self, line: &str) -> EvalResult {
        for token in lex(line) {
            if let Err(err) = self.step(token) {
                self.builder.reset();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Run a multi-line program, stopping at the first error or at `quit`.
    ///
    /// Ending inside a procedure literal is an error.
    pub fn interpret_source(&mut self, source: &str) -> EvalResult {
        for line in source.lines() {
            self.interpret_line(line)?;
            if self.terminated {
                return Ok(());
            }
        }
        if self.builder.is_capturing() {
            self.builder.reset();
            return Err(malformed_procedure("input ended inside `{`"));
        }
        Ok(())
    }

    fn step(&mut self, token: Token<'_>) -> EvalResult {
        match self.builder.feed(token)? {
            Feed::Captured => Ok(()),
            Feed::Complete(procedure) => {
                self.stack.push(procedure);
                Ok(())
            }
            Feed::Dispatch(token) => self.dispatch(token),
        }
    }

    /// Execute `procedure`'s body as a new call frame.
    ///
    /// `name` is what the procedure was invoked as, `None` when run by a
    /// control-flow operator.
    #[tracing::instrument(level = "debug", skip(self, procedure))]
    pub(crate) fn run_procedure(&mut self, procedure: ProcRef, name: Option<&str>) -> EvalResult {
        ensure_sufficient_stack(|| {
            let frame = CallFrame {
                name: name.map(str::to_owned),
                procedure: procedure.clone(),
            };
            let mut scoped = self.enter_frame(frame)?;
            scoped.run_body(&procedure)
        })
    }

    fn run_body(&mut self, procedure: &ProcRef) -> EvalResult {
        let mut builder = ProcedureBuilder::new();
        for token in procedure.body() {
            let token = token.as_token();
            trace!(%token, depth = self.call_stack.depth(), "body token");
            let result = match builder.feed(token) {
                Ok(Feed::Captured) => Ok(()),
                Ok(Feed::Complete(inner)) => {
                    self.stack.push(inner);
                    Ok(())
                }
                Ok(Feed::Dispatch(token)) => self.dispatch(token),
                Err(err) => Err(err),
            };
            result.map_err(|err| self.call_stack.attach_backtrace(err))?;
        }
        Ok(())
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }

    pub fn dictionaries(&self) -> &DictionaryStack {
        &self.dictionaries
    }

    #[inline]
    pub fn scope_mode(&self) -> ScopeMode {
        self.dictionaries.mode()
    }

    /// Whether a `{` is still waiting for its `}`.
    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.builder.is_capturing()
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Discard a partial procedure literal.
    pub fn reset_builder(&mut self) {
        self.builder.reset();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
