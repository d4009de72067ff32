// src/ops/activation/tanh.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;

// --- Forward Operation ---

/// Hyperbolic tangent.
///
/// Local rule: `(1 - tanh(a)^2) * go`.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), GradFn::Tanh(a.clone()))
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
