// src/autograd/graph.rs

use crate::value::{Value, ValueData};
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable node identity for graph traversal: the allocation address of the
/// shared node state. Handles may be cloned or dropped freely without
/// changing a node's identity.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a topological order of the subgraph reachable from `root`:
/// depth-first, operands appended before the nodes computed from them.
///
/// The visited set is keyed by [`NodeId`], so a node reachable through any
/// number of paths is placed in the order exactly once.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    build_topo(root, &mut visited, &mut order);
    order
}

fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, order: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        trace!("build_topo: node {:?} already visited", node.node_id());
        return;
    }
    if let Some(grad_fn) = node.grad_fn() {
        for input in grad_fn.inputs() {
            build_topo(&input, visited, order);
        }
    }
    order.push(node.clone());
}

/// Backward pass from `root`: seeds d(root)/d(root) = 1 and replays each
/// node's gradient rule in reverse topological order.
///
/// Because operands precede their consumers in the forward order, the
/// reversed order guarantees a node propagates only after everything that
/// could still add to its own gradient already has. Gradients of nodes other
/// than the root are left as found; callers wanting a fresh pass reset them
/// beforehand (see `Value::zero_grad`).
pub(crate) fn run_backward(root: &Value) {
    let order = topological_sort(root);
    trace!(
        "backward: replaying {} node(s) from root {:?}",
        order.len(),
        root.node_id()
    );

    root.inner.borrow_mut().grad = 1.0;

    for node in order.iter().rev() {
        if let Some(grad_fn) = node.grad_fn() {
            grad_fn.propagate(node.grad());
        }
    }
}
