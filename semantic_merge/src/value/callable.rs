//! Opaque callable values.

use std::fmt;
use std::rc::Rc;

use super::Value;

type CallableFn = dyn Fn(&[Value]) -> Value;

/// A function carried inside a value tree.
///
/// Callables are never traversed. The merge engine copies them by reference,
/// even when merging recursively, and they compare equal only to themselves.
#[derive(Clone)]
pub struct Callable(Rc<CallableFn>);

impl Callable {
    /// Wrap a closure.
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self(Rc::new(function))
    }

    /// Invoke the callable.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns `true` when both handles point at the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}
