//! Error types for evaluation.
//!
//! `EvalErrorKind` is the typed category; `EvalError` wraps it together with
//! the procedure backtrace active when it was raised. Factory functions
//! (e.g. `division_by_zero()`) are the public construction API.

use std::fmt;

use crate::value::Value;

/// Result of evaluation. Most operators only have side effects on the stack.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("stack underflow in `{operator}`: needs {needed} operand(s), found {found}")]
    StackUnderflow {
        operator: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("type mismatch in `{operator}`: expected {expected}, got {got}")]
    TypeMismatch {
        operator: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// Zero divisor in `div`, `idiv` or `mod`.
    #[error("undefined result in `{operator}`: division by zero")]
    DivisionByZero { operator: &'static str },

    /// Operand outside the function's domain (negative `sqrt`).
    #[error("undefined result in `{operator}`: {operand} is outside the domain")]
    DomainError {
        operator: &'static str,
        operand: String,
    },

    #[error("range check in `{operator}`: index {index} out of range for length {len}")]
    IndexOutOfRange {
        operator: &'static str,
        index: i64,
        len: usize,
    },

    #[error("dictionary full: capacity of {capacity} reached")]
    CapacityExceeded { capacity: usize },

    #[error("invalid dictionary capacity: {capacity}")]
    InvalidCapacity { capacity: i64 },

    /// `end` with only the default dictionary left on the scope chain.
    #[error("dictionary stack underflow: the default dictionary cannot be ended")]
    ScopeUnderflow,

    #[error("unknown command: {token}")]
    UnknownCommand { token: String },

    #[error("malformed procedure: {reason}")]
    MalformedProcedure { reason: String },

    #[error("maximum call depth exceeded (limit: {depth})")]
    RecursionLimit { depth: usize },
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name the procedure was invoked under, or `<anonymous>`.
    pub name: String,
}

/// Snapshot of the procedure call stack at an error site, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "procedure backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    /// Structured category, for matching.
    pub kind: EvalErrorKind,
    /// Procedure frames active where the error was raised. Only the
    /// innermost frame attaches one; outer frames leave it untouched.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            backtrace: None,
        }
    }

    /// Attach a backtrace unless one is already present.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() && !backtrace.is_empty() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::new(kind)
    }
}

// Stack Errors

#[cold]
pub fn stack_underflow(operator: &'static str, needed: usize, found: usize) -> EvalError {
    EvalErrorKind::StackUnderflow {
        operator,
        needed,
        found,
    }
    .into()
}

#[cold]
pub fn scope_underflow() -> EvalError {
    EvalErrorKind::ScopeUnderflow.into()
}

// Type Errors

#[cold]
pub fn type_mismatch(operator: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch {
        operator,
        expected,
        got: got.type_name(),
    }
    .into()
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero(operator: &'static str) -> EvalError {
    EvalErrorKind::DivisionByZero { operator }.into()
}

#[cold]
pub fn domain_error(operator: &'static str, operand: &Value) -> EvalError {
    EvalErrorKind::DomainError {
        operator,
        operand: operand.to_string(),
    }
    .into()
}

// Access Errors

#[cold]
pub fn index_out_of_range(operator: &'static str, index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfRange {
        operator,
        index,
        len,
    }
    .into()
}

// Dictionary Errors

#[cold]
pub fn capacity_exceeded(capacity: usize) -> EvalError {
    EvalErrorKind::CapacityExceeded { capacity }.into()
}

#[cold]
pub fn invalid_capacity(capacity: i64) -> EvalError {
    EvalErrorKind::InvalidCapacity { capacity }.into()
}

// Dispatch Errors

#[cold]
pub fn unknown_command(token: impl Into<String>) -> EvalError {
    EvalErrorKind::UnknownCommand {
        token: token.into(),
    }
    .into()
}

#[cold]
pub fn malformed_procedure(reason: impl Into<String>) -> EvalError {
    EvalErrorKind::MalformedProcedure {
        reason: reason.into(),
    }
    .into()
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalErrorKind::RecursionLimit { depth }.into()
}
