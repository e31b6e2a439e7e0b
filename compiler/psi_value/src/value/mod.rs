//! Runtime values for the psi interpreter.
//!
//! `Value` is a closed tagged union; every operator matches on the tag
//! rather than probing types at runtime.
//!
//! # Canonicalisation
//!
//! Numbers enter the system through [`Value::number`], which stores any
//! finite whole-valued double as `Int` and everything else as `Real`:
//!
//! ```text
//! Value::number(3.0)  => Int(3)
//! Value::number(2.5)  => Real(2.5)
//! Value::number(1e300) => Real(1e300)   // not representable as i64
//! ```
//!
//! Operators whose result type is fixed (`div` and `sqrt` always produce a
//! real) build the variant directly with [`Value::real`].

mod dictionary;
mod display;
mod procedure;

use std::fmt;
use std::rc::Rc;

pub use dictionary::{DictRef, Dictionary};
pub use procedure::{ProcRef, Procedure, Snapshot};

/// Largest magnitude at which every whole `f64` still converts to `i64`
/// without saturating.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Whether `x` is finite and has no fractional part.
#[inline]
pub fn is_whole(x: f64) -> bool {
    x.is_finite() && x == x.floor()
}

/// Runtime value in the psi interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Real(f64),
    /// Boolean value.
    Bool(bool),
    /// String value, from a `( ... )` literal or a string operator.
    Text(Rc<str>),
    /// Definable identifier, from a `/name` literal.
    Name(Rc<str>),
    /// Shared dictionary.
    Dict(DictRef),
    /// Shared procedure.
    Proc(ProcRef),
}

impl Value {
    /// Canonicalising numeric constructor.
    ///
    /// Whole finite values that fit in an `i64` become `Int`; everything
    /// else stays `Real`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "guarded by is_whole and the i64 bound check"
    )]
    pub fn number(x: f64) -> Self {
        if is_whole(x) && x >= -I64_BOUND && x < I64_BOUND {
            Value::Int(x as i64)
        } else {
            Value::Real(x)
        }
    }

    #[inline]
    #[must_use]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    #[must_use]
    pub fn real(x: f64) -> Self {
        Value::Real(x)
    }

    #[must_use]
    pub fn text(s: impl Into<Rc<str>>) -> Self {
        Value::Text(s.into())
    }

    #[must_use]
    pub fn name(s: impl Into<Rc<str>>) -> Self {
        Value::Name(s.into())
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "string",
            Value::Name(_) => "name",
            Value::Dict(_) => "dict",
            Value::Proc(_) => "procedure",
        }
    }

    /// Numeric value as a double, for `Int` and `Real`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "numeric operators work in f64 like the language does"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// Whether this is an `Int` or a `Real`.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }

    /// Contents of a string-like value (`Text` or `Name`).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Name(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Shared key form of a string-like value.
    pub fn as_key(&self) -> Option<Rc<str>> {
        match self {
            Value::Text(s) | Value::Name(s) => Some(Rc::clone(s)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<DictRef> for Value {
    fn from(d: DictRef) -> Self {
        Value::Dict(d)
    }
}

impl From<ProcRef> for Value {
    fn from(p: ProcRef) -> Self {
        Value::Proc(p)
    }
}

/// Raw display form, used by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_raw(self, f)
    }
}
