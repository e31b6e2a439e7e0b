//! Bounded dictionaries and their shared handle.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::Value;
use crate::errors::{capacity_exceeded, EvalResult};

/// A key/value mapping with a fixed maximum entry count.
///
/// Capacity is only consulted when a *new* key is inserted; overwriting an
/// existing key always succeeds. A capacity of 0 rejects every insertion.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: FxHashMap<Rc<str>, Value>,
    capacity: usize,
}

impl Dictionary {
    /// Create an empty dictionary that accepts up to `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            entries: FxHashMap::default(),
            capacity,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum entry count fixed at creation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite `key`.
    ///
    /// Fails with `CapacityExceeded` when `key` is new and the dictionary
    /// is already full.
    pub fn insert(&mut self, key: Rc<str>, value: Value) -> EvalResult<Option<Value>> {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            return Err(capacity_exceeded(self.capacity));
        }
        Ok(self.entries.insert(key, value))
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Value)> {
        self.entries.iter()
    }
}

/// Shared, interiorly mutable handle to a [`Dictionary`].
///
/// Cloning the handle aliases the same dictionary, which is how one
/// dictionary can sit on the operand stack and the scope chain at once.
/// Equality is identity.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct DictRef(Rc<RefCell<Dictionary>>);

impl DictRef {
    /// Allocate a new empty dictionary with the given capacity.
    pub fn new(capacity: usize) -> Self {
        DictRef(Rc::new(RefCell::new(Dictionary::with_capacity(capacity))))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Dictionary> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Dictionary> {
        self.0.borrow_mut()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Maximum entry count.
    pub fn capacity(&self) -> usize {
        self.0.borrow().capacity()
    }

    /// Look up `key`, cloning the value out of the dictionary.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert or overwrite `key`, honouring the capacity rule.
    pub fn define(&self, key: Rc<str>, value: Value) -> EvalResult {
        self.0.borrow_mut().insert(key, value).map(|_| ())
    }

    /// Whether both handles point at the same dictionary.
    #[inline]
    pub fn ptr_eq(&self, other: &DictRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for DictRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Entries are left out: a dictionary may contain itself.
impl fmt::Debug for DictRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dict = self.0.borrow();
        f.debug_struct("DictRef")
            .field("len", &dict.len())
            .field("capacity", &dict.capacity())
            .finish()
    }
}
