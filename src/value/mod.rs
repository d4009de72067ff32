// src/value/mod.rs

use crate::autograd::grad_fn::GradFn;
use crate::autograd::graph::{run_backward, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

mod ops_methods;
mod traits;

/// Internal node state: forward value, gradient accumulator, and the
/// provenance record linking back to the operands that produced it.
pub(crate) struct ValueData {
    /// Forward value, fixed when the node is constructed.
    pub(crate) data: f64,
    /// d(root)/d(this node) for the most recent backward pass.
    /// Accumulates across propagation sources and is never cleared implicitly.
    pub(crate) grad: f64,
    /// `None` for leaf nodes. For operation results, the tagged gradient rule
    /// carrying exactly the operand handles and constants the rule needs.
    pub(crate) grad_fn: Option<GradFn>,
}

/// A differentiable scalar value: one node in the computation DAG.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the operand of many other nodes
///     (shared sub-expressions / diamonds), and any number of handles can
///     point to it without copying the node itself (cheap clones).
/// 2.  **Interior Mutability:** `grad` is mutated during the backward pass
///     through immutable handles, via the `RefCell`.
///
/// Node identity is pointer identity: two nodes holding equal `data` are
/// distinct if they are different constructed instances. The graph is
/// acyclic by construction since nodes are only built from already-existing
/// nodes.
pub struct Value {
    pub(crate) inner: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (constant or independent input) with gradient 0.
    pub fn new(data: f64) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                grad_fn: None,
            })),
        }
    }

    /// Creates an operation-result node. The forward value is computed by the
    /// caller (eagerly, at construction); `grad_fn` records how to distribute
    /// an incoming gradient to the operands.
    pub(crate) fn from_op(data: f64, grad_fn: GradFn) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                grad_fn: Some(grad_fn),
            })),
        }
    }

    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.inner.borrow().data
    }

    /// Overwrites the forward value of this node.
    ///
    /// Intended for leaf parameters updated by an external optimizer step.
    /// Operation-result nodes are not recomputed: values already derived from
    /// this node keep the forward values they were built with.
    pub fn set_data(&self, data: f64) {
        self.inner.borrow_mut().data = data;
    }

    /// Returns the gradient accumulated by the most recent backward pass.
    pub fn grad(&self) -> f64 {
        self.inner.borrow().grad
    }

    /// Resets the gradient accumulator to 0.
    ///
    /// Gradients accumulate across backward passes; callers must reset their
    /// parameter nodes before each new pass if a fresh result is desired.
    pub fn zero_grad(&self) {
        self.inner.borrow_mut().grad = 0.0;
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.inner.borrow().grad_fn.is_none()
    }

    /// Returns a label for the operation that produced this node, if any.
    /// Diagnostic only; the backward engine dispatches on the gradient rule
    /// itself, not on this label.
    pub fn op(&self) -> Option<&'static str> {
        self.inner.borrow().grad_fn.as_ref().map(|f| f.op())
    }

    /// Returns a clone of the gradient rule (cheap: operand handles are `Rc`s).
    pub(crate) fn grad_fn(&self) -> Option<GradFn> {
        self.inner.borrow().grad_fn.clone()
    }

    /// Adds `contribution` into this node's gradient accumulator.
    /// Summed, never overwritten: a node reached through several paths
    /// receives every path's contribution.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.inner.borrow_mut().grad += contribution;
    }

    /// Stable identity of this node for graph traversal, keyed by the
    /// allocation address rather than by value equality.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.inner)
    }

    /// Runs the backward pass with this node as root.
    ///
    /// Computes `grad` for every node reachable from here: the root's
    /// gradient is seeded to 1.0 and each reachable node's gradient rule is
    /// replayed exactly once, in reverse topological order. Other nodes'
    /// accumulators are left as found; see [`Value::zero_grad`].
    pub fn backward(&self) {
        run_backward(self);
    }
}
