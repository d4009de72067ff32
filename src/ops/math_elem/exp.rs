// src/ops/math_elem/exp.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;

// --- Forward Operation ---

/// Natural exponential: `e^a`.
///
/// Local rule: `e^a * go`. Overflow is not checked; `inf` propagates
/// through both the forward value and the gradient.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), GradFn::Exp(a.clone()))
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
