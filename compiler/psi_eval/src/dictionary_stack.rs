//! Dictionary stack (the scope chain) and name resolution.
//!
//! The bottom of the chain is the default dictionary, which lives for the
//! whole session and can never be ended. `begin` pushes a dictionary on
//! top; `def` always writes into the topmost one.
//!
//! # Resolution
//!
//! ```text
//! dynamic: top -> ... -> default, first hit wins
//! lexical: snapshot of the executing procedure, then the top dictionary only
//! ```
//!
//! The lexical fallback does not walk the rest of the chain.

use std::rc::Rc;

use psi_value::{invalid_capacity, scope_underflow, DictRef, EvalResult, ProcRef, Snapshot, Value};
use tracing::debug;

/// Capacity of the default dictionary unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 32;

/// How newly defined procedures resolve their free names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScopeMode {
    /// Names are looked up on the live chain when used.
    #[default]
    Dynamic,
    /// Procedures capture a snapshot of the chain when defined.
    Lexical,
}

impl ScopeMode {
    /// Letter shown in the REPL prompt.
    pub fn symbol(self) -> char {
        match self {
            ScopeMode::Dynamic => 'D',
            ScopeMode::Lexical => 'L',
        }
    }
}

/// Scope chain plus the global scope mode flag.
#[derive(Debug)]
pub struct DictionaryStack {
    default: DictRef,
    /// Dictionaries entered with `begin`, innermost last.
    scopes: Vec<DictRef>,
    mode: ScopeMode,
}

impl DictionaryStack {
    pub fn new(default_capacity: usize) -> Self {
        DictionaryStack {
            default: DictRef::new(default_capacity),
            scopes: Vec::new(),
            mode: ScopeMode::default(),
        }
    }

    /// Create a fresh dictionary for `dict`. Nothing is entered.
    pub fn allocate(capacity: i64) -> EvalResult<DictRef> {
        let cap = usize::try_from(capacity).map_err(|_| invalid_capacity(capacity))?;
        Ok(DictRef::new(cap))
    }

    /// Number of dictionaries on the chain, the default included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len() + 1
    }

    /// The dictionary `def` writes into.
    #[inline]
    pub fn current(&self) -> &DictRef {
        self.scopes.last().unwrap_or(&self.default)
    }

    pub fn default_dictionary(&self) -> &DictRef {
        &self.default
    }

    pub fn enter(&mut self, dict: DictRef) {
        self.scopes.push(dict);
        debug!(depth = self.depth(), "begin scope");
    }

    /// Leave the innermost scope. The default dictionary stays.
    pub fn exit(&mut self) -> EvalResult<DictRef> {
        let dict = self.scopes.pop().ok_or_else(scope_underflow)?;
        debug!(depth = self.depth(), "end scope");
        Ok(dict)
    }

    /// Flatten the whole chain, bottom to top, so inner entries overwrite
    /// outer ones.
    pub fn capture(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for dict in std::iter::once(&self.default).chain(&self.scopes) {
            for (key, value) in dict.borrow().iter() {
                snapshot.insert(Rc::clone(key), value.clone());
            }
        }
        snapshot
    }

    /// Bind `key` in the current dictionary.
    ///
    /// In lexical mode a procedure value first receives a snapshot of the
    /// chain as it stands, before the binding itself is added.
    pub fn define(&mut self, key: Rc<str>, value: Value) -> EvalResult {
        if let (ScopeMode::Lexical, Value::Proc(proc_ref)) = (self.mode, &value) {
            let snapshot = self.capture();
            debug!(name = %key, entries = snapshot.len(), "captured lexical snapshot");
            proc_ref.attach_snapshot(snapshot);
        }
        debug!(name = %key, mode = ?self.mode, "def");
        self.current().define(key, value)
    }

    /// Look `key` up according to the current mode.
    ///
    /// `executing` is the procedure whose body is being run, if any.
    pub fn resolve(&self, key: &str, executing: Option<&ProcRef>) -> Option<Value> {
        match self.mode {
            ScopeMode::Dynamic => self.resolve_dynamic(key),
            ScopeMode::Lexical => executing
                .and_then(|proc_ref| proc_ref.snapshot_lookup(key))
                .or_else(|| self.current().get(key)),
        }
    }

    fn resolve_dynamic(&self, key: &str) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .chain(std::iter::once(&self.default))
            .find_map(|dict| dict.get(key))
    }

    #[inline]
    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ScopeMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "scope mode switch");
        }
        self.mode = mode;
    }
}

impl Default for DictionaryStack {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
