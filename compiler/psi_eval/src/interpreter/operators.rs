//! Builtin execution: stack, dictionary and output operators, plus the
//! routing table to the arithmetic, comparison, string and flow modules.

use psi_value::{type_mismatch, EvalResult, Value};
use tracing::debug;

use super::Interpreter;
use crate::builtins::Builtin;
use crate::dictionary_stack::{DictionaryStack, ScopeMode};
use crate::{arithmetic, comparison, strings};

impl Interpreter {
    pub(crate) fn execute_builtin(&mut self, builtin: Builtin) -> EvalResult {
        let stack = &mut self.stack;
        match builtin {
            Builtin::Exch => stack.exchange(),
            Builtin::Pop => stack.pop(builtin.name()).map(drop),
            Builtin::Copy => stack.copy_top(),
            Builtin::Dup => stack.duplicate(),
            Builtin::Clear => {
                stack.clear();
                Ok(())
            }
            Builtin::Count => {
                let depth = i64::try_from(stack.count()).unwrap_or(i64::MAX);
                stack.push(depth);
                Ok(())
            }

            Builtin::Add => arithmetic::add(stack),
            Builtin::Sub => arithmetic::sub(stack),
            Builtin::Mul => arithmetic::mul(stack),
            Builtin::Div => arithmetic::div(stack),
            Builtin::Idiv => arithmetic::idiv(stack),
            Builtin::Mod => arithmetic::modulo(stack),
            Builtin::Abs => arithmetic::abs(stack),
            Builtin::Neg => arithmetic::neg(stack),
            Builtin::Ceiling => arithmetic::ceiling(stack),
            Builtin::Floor => arithmetic::floor(stack),
            Builtin::Round => arithmetic::round(stack),
            Builtin::Sqrt => arithmetic::sqrt(stack),

            Builtin::Dict => self.op_dict(),
            Builtin::Maxlength => self.op_maxlength(),
            Builtin::Begin => self.op_begin(),
            Builtin::End => self.dictionaries.exit().map(drop),
            Builtin::Def => self.op_def(),
            Builtin::Dyn => {
                self.dictionaries.set_mode(ScopeMode::Dynamic);
                Ok(())
            }
            Builtin::Lex => {
                self.dictionaries.set_mode(ScopeMode::Lexical);
                Ok(())
            }

            Builtin::Length => strings::length(stack),
            Builtin::Get => strings::get(stack),
            Builtin::Getinterval => strings::getinterval(stack),
            Builtin::Putinterval => strings::putinterval(stack),

            Builtin::Eq => comparison::eq(stack),
            Builtin::Ne => comparison::ne(stack),
            Builtin::Gt => comparison::gt(stack),
            Builtin::Lt => comparison::lt(stack),
            Builtin::Ge => comparison::ge(stack),
            Builtin::Le => comparison::le(stack),
            Builtin::And => comparison::and(stack),
            Builtin::Or => comparison::or(stack),
            Builtin::Not => comparison::not(stack),
            Builtin::True => {
                stack.push(true);
                Ok(())
            }
            Builtin::False => {
                stack.push(false);
                Ok(())
            }

            Builtin::If => self.op_if(),
            Builtin::Ifelse => self.op_ifelse(),
            Builtin::For => self.op_for(),
            Builtin::Repeat => self.op_repeat(),
            Builtin::Quit => {
                self.quit();
                Ok(())
            }

            Builtin::Print => self.emit(builtin.name(), |v| v.to_string()),
            Builtin::Equals => self.emit(builtin.name(), Value::to_element_string),
            Builtin::DoubleEquals => self.emit(builtin.name(), Value::to_detailed_string),
        }
    }

    /// `n dict`: push a new dictionary of capacity `n`. Reals are truncated.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a real capacity is truncated toward zero"
    )]
    fn op_dict(&mut self) -> EvalResult {
        let capacity = match self.stack.pop_number("dict")? {
            Value::Int(n) => n,
            Value::Real(x) => x.trunc() as i64,
            other => return Err(type_mismatch("dict", "number", &other)),
        };
        let dict = DictionaryStack::allocate(capacity)?;
        self.stack.push(dict);
        Ok(())
    }

    fn op_maxlength(&mut self) -> EvalResult {
        let dict = self.stack.pop_dict("maxlength")?;
        let capacity = i64::try_from(dict.capacity()).unwrap_or(i64::MAX);
        self.stack.push(capacity);
        Ok(())
    }

    fn op_begin(&mut self) -> EvalResult {
        let dict = self.stack.pop_dict("begin")?;
        self.dictionaries.enter(dict);
        Ok(())
    }

    /// `/key value def`
    fn op_def(&mut self) -> EvalResult {
        self.stack.require("def", 2)?;
        let value = self.stack.pop("def")?;
        let key = self.stack.pop_string("def")?;
        self.dictionaries.define(key, value)
    }

    /// Pop one value and write it as a line.
    fn emit(&mut self, operator: &'static str, render: fn(&Value) -> String) -> EvalResult {
        let value = self.stack.pop(operator)?;
        self.print_handler.println(&render(&value));
        Ok(())
    }

    pub(crate) fn quit(&mut self) {
        debug!("quit");
        self.terminated = true;
    }
}
