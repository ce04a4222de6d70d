//! Shared, append-only sequences.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// Handle to an ordered container.
///
/// Cloning the handle shares the underlying sequence.
#[derive(Clone, Default)]
pub struct SequenceRef(Rc<RefCell<Vec<Value>>>);

impl SequenceRef {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` at the end.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Element at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` when the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the elements in order.
    #[must_use]
    pub fn elements(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Returns `true` when some element [is the same](Value::is_same) as
    /// `value`.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.borrow().iter().any(|element| element.is_same(value))
    }

    /// Returns `true` when both handles point at the same sequence.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<V: Into<Value>> FromIterator<V> for SequenceRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(Rc::new(RefCell::new(iter.into_iter().map(Into::into).collect())))
    }
}

impl fmt::Debug for SequenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => f
                .debug_struct("SequenceRef")
                .field("len", &inner.len())
                .finish_non_exhaustive(),
            Err(_) => f.write_str("SequenceRef(<borrowed>)"),
        }
    }
}
