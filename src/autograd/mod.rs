//! Reverse-mode automatic differentiation over the scalar computation graph.
//!
//! Forward operations (see [`crate::ops`]) eagerly build a DAG of [`crate::Value`]
//! nodes; each operation-result node carries a tagged [`grad_fn::GradFn`]
//! recording its operands and local gradient rule. `Value::backward` hands the
//! root to [`graph::run_backward`], which topologically sorts the reachable
//! subgraph and replays every rule exactly once, in reverse order.

pub mod grad_check;
pub(crate) mod grad_fn;
pub(crate) mod graph;

pub use grad_check::check_grad;
