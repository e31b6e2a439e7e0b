//! `InterpreterBuilder` for configuring a session.

use super::Interpreter;
use crate::call_stack::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::dictionary_stack::{DictionaryStack, ScopeMode, DEFAULT_CAPACITY};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::procedure_builder::ProcedureBuilder;
use crate::OperandStack;

/// Builder for [`Interpreter`].
///
/// Defaults: stdout output, a default dictionary of capacity 32, a call
/// depth limit of 10 000 and dynamic scoping.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    default_dictionary_capacity: usize,
    max_call_depth: Option<usize>,
    scope_mode: ScopeMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            default_dictionary_capacity: DEFAULT_CAPACITY,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            scope_mode: ScopeMode::default(),
        }
    }

    /// Where `print`, `=` and `==` write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn default_dictionary_capacity(mut self, capacity: usize) -> Self {
        self.default_dictionary_capacity = capacity;
        self
    }

    /// Procedure nesting limit; `None` for unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn scope_mode(mut self, mode: ScopeMode) -> Self {
        self.scope_mode = mode;
        self
    }

    pub fn build(self) -> Interpreter {
        let mut dictionaries = DictionaryStack::new(self.default_dictionary_capacity);
        dictionaries.set_mode(self.scope_mode);
        Interpreter {
            stack: OperandStack::new(),
            dictionaries,
            builder: ProcedureBuilder::new(),
            call_stack: CallStack::new(self.max_call_depth),
            terminated: false,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
