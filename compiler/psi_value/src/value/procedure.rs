//! Procedures: deferred token sequences with an optional lexical snapshot.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use psi_lexer::SourceToken;
use rustc_hash::FxHashMap;

use super::Value;

/// Flattened view of the whole scope chain, captured when a procedure is
/// defined in lexical mode.
pub type Snapshot = FxHashMap<Rc<str>, Value>;

/// A procedure body plus the snapshot attached to it, if any.
pub struct Procedure {
    /// Tokens between the outer braces, verbatim.
    body: Box<[SourceToken]>,
    /// Attached by `def` under lexical mode; replaced if the same procedure
    /// is defined again.
    snapshot: RefCell<Option<Rc<Snapshot>>>,
}

/// Shared handle to a [`Procedure`].
///
/// Copies made with `dup` or stored in several dictionaries are the same
/// procedure, so a snapshot attached through one handle is seen by all of
/// them. Equality is identity.
#[derive(Clone)]
pub struct ProcRef(Rc<Procedure>);

impl ProcRef {
    /// Build a procedure from its body tokens (outer braces already removed).
    pub fn new(body: Vec<SourceToken>) -> Self {
        ProcRef(Rc::new(Procedure {
            body: body.into_boxed_slice(),
            snapshot: RefCell::new(None),
        }))
    }

    #[inline]
    pub fn body(&self) -> &[SourceToken] {
        &self.0.body
    }

    /// The attached lexical snapshot, if this procedure was defined in
    /// lexical mode.
    pub fn snapshot(&self) -> Option<Rc<Snapshot>> {
        self.0.snapshot.borrow().clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.0.snapshot.borrow().is_some()
    }

    /// Attach (or replace) the lexical snapshot.
    pub fn attach_snapshot(&self, snapshot: Snapshot) {
        *self.0.snapshot.borrow_mut() = Some(Rc::new(snapshot));
    }

    /// Look `key` up in the attached snapshot.
    pub fn snapshot_lookup(&self, key: &str) -> Option<Value> {
        self.0
            .snapshot
            .borrow()
            .as_ref()
            .and_then(|snap| snap.get(key).cloned())
    }

    #[inline]
    pub fn ptr_eq(&self, other: &ProcRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Source form, `{ tok tok ... }`.
    pub fn source(&self) -> String {
        let mut out = String::from("{");
        for token in self.body() {
            out.push(' ');
            out.push_str(&token.to_string());
        }
        out.push_str(" }");
        out
    }
}

impl PartialEq for ProcRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ProcRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcRef")
            .field("source", &self.source())
            .field("lexical", &self.has_snapshot())
            .finish()
    }
}
