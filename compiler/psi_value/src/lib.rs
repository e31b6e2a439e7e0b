//! Psi Value - runtime values and errors for the psi interpreter.
//!
//! This crate provides:
//! - The tagged runtime value (`Value`) and its canonicalisation rule
//! - Shared dictionaries (`DictRef`) and procedures (`ProcRef`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Ownership
//!
//! Dictionaries and procedures are shared by reference. A dictionary that is
//! on the operand stack, on the scope chain, and inside a lexical snapshot
//! is one allocation; it is freed when the last of those references goes.

mod errors;
mod value;

pub use errors::{
    capacity_exceeded, division_by_zero, domain_error, index_out_of_range, invalid_capacity,
    malformed_procedure, recursion_limit_exceeded, scope_underflow, stack_underflow,
    type_mismatch, unknown_command, BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind,
    EvalResult,
};
pub use value::{is_whole, DictRef, Dictionary, ProcRef, Procedure, Snapshot, Value};
