//! Token dispatch.
//!
//! A word is tried, in order, as a `/name` literal, a number, a defined
//! name and a builtin keyword. Definitions shadow builtins; numbers
//! cannot be shadowed.

use psi_lexer::Token;
use psi_value::{malformed_procedure, unknown_command, EvalResult, Value};
use tracing::trace;

use super::Interpreter;
use crate::builtins::Builtin;

/// Parse a numeric literal. A `.` makes it real, otherwise it must fit
/// an `i64`. Whole reals are canonicalised to integers.
pub(crate) fn parse_number(word: &str) -> Option<Value> {
    if word.contains('.') {
        // `f64::from_str` also takes `inf`, `nan` and exponents; require a digit
        // so words such as `.` or `inf.` stay words.
        if !word.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        word.parse::<f64>().ok().map(Value::number)
    } else {
        word.parse::<i64>().ok().map(Value::Int)
    }
}

impl Interpreter {
    pub(crate) fn dispatch(&mut self, token: Token<'_>) -> EvalResult {
        trace!(%token, "dispatch");
        match token {
            Token::Word(word) => self.dispatch_word(word),
            Token::Text(text) => {
                self.stack.push(Value::text(text));
                Ok(())
            }
            Token::Invalid(text) => Err(unknown_command(text)),
            Token::OpenBrace | Token::CloseBrace => {
                Err(malformed_procedure("brace reached the dispatcher"))
            }
        }
    }

    fn dispatch_word(&mut self, word: &str) -> EvalResult {
        if let Some(name) = word.strip_prefix('/') {
            self.stack.push(Value::name(name));
            return Ok(());
        }

        if let Some(number) = parse_number(word) {
            self.stack.push(number);
            return Ok(());
        }

        match self.dictionaries.resolve(word, self.call_stack.current()) {
            Some(Value::Proc(procedure)) => return self.run_procedure(procedure, Some(word)),
            Some(value) => {
                self.stack.push(value);
                return Ok(());
            }
            None => {}
        }

        match Builtin::lookup(word) {
            Some(builtin) => self.execute_builtin(builtin),
            None => Err(unknown_command(word)),
        }
    }
}
