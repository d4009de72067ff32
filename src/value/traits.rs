// src/value/traits.rs
//
// Handle semantics for `Value`: cloning shares the node, equality and
// hashing follow node identity (pointer address), not the stored float.

use super::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl Clone for Value {
    /// Clones the handle, not the node. Both handles refer to the same node
    /// in the graph and observe the same `data` / `grad`.
    fn clone(&self) -> Self {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PartialEq for Value {
    /// Identity comparison: two handles are equal iff they point at the same
    /// constructed node. Two distinct nodes with equal `data` compare unequal.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.inner).hash(state);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let mut s = f.debug_struct("Value");
        s.field("data", &inner.data).field("grad", &inner.grad);
        if let Some(grad_fn) = inner.grad_fn.as_ref() {
            s.field("op", &grad_fn.op());
        }
        s.finish()
    }
}
