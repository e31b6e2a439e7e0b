//! Psi Eval - interpreter runtime for the psi stack language.
//!
//! # Architecture
//!
//! - `OperandStack`: the value stack every operator works on
//! - `ProcedureBuilder`: collects `{ ... }` literals, possibly across lines
//! - `DictionaryStack`: scope chain, dynamic/lexical resolution, snapshots
//! - `CallStack`: running procedures, depth limit, backtraces
//! - `arithmetic`, `comparison`, `strings`: operators as functions over
//!   the operand stack
//! - `Interpreter`: the session; dispatch, flow control, output
//!
//! # Re-exports
//!
//! Value and error types come from `psi_value`.

mod arithmetic;
mod builtins;
pub mod call_stack;
mod comparison;
pub mod dictionary_stack;
pub mod interpreter;
mod operand_stack;
mod print_handler;
pub mod procedure_builder;
mod stack;
mod strings;

pub use psi_value::{EvalError, EvalErrorKind, EvalResult, Value};

pub use builtins::Builtin;
pub use call_stack::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use dictionary_stack::{DictionaryStack, ScopeMode, DEFAULT_CAPACITY};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operand_stack::OperandStack;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use procedure_builder::{Feed, ProcedureBuilder};
pub use stack::ensure_sufficient_stack;
