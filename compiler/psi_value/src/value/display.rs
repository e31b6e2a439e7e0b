//! Textual forms of values for the three output operators.
//!
//! - raw (`print`): the value itself
//! - element (`=`): strings parenthesised, names slashed
//! - detailed (`==`): as element, dictionaries report their size

use std::fmt;

use super::Value;

const DICT_PLACEHOLDER: &str = "-dict-";
const PROC_PLACEHOLDER: &str = "-procedure-";

/// Reals always show a fractional part so they stay distinguishable from
/// integers: `2.0`, not `2`.
fn write_real(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x == x.trunc() {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

pub(super) fn write_raw(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Real(x) => write_real(*x, f),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Text(s) | Value::Name(s) => f.write_str(s),
        Value::Dict(_) => f.write_str(DICT_PLACEHOLDER),
        Value::Proc(_) => f.write_str(PROC_PLACEHOLDER),
    }
}

impl Value {
    /// Form written by `=`.
    pub fn to_element_string(&self) -> String {
        match self {
            Value::Text(s) => format!("({s})"),
            Value::Name(s) => format!("/{s}"),
            other => other.to_string(),
        }
    }

    /// Form written by `==`.
    pub fn to_detailed_string(&self) -> String {
        match self {
            Value::Dict(d) => format!("{DICT_PLACEHOLDER} contains {} elements", d.len()),
            other => other.to_element_string(),
        }
    }
}
