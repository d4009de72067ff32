// src/ops/activation/relu.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;

// --- Forward Operation ---

/// Rectified Linear Unit: `max(0, a)`.
///
/// Local rule: the output gradient passes through unchanged when the input
/// is strictly positive and is dropped otherwise. The sub-gradient at
/// exactly 0 is 0; the strict `> 0` test is part of the engine's contract
/// and must not be relaxed to `>=`.
pub fn relu_op(a: &Value) -> Value {
    let data = a.data();
    let forward = if data > 0.0 { data } else { 0.0 };
    Value::from_op(forward, GradFn::Relu(a.clone()))
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
