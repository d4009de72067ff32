// src/ops/arithmetic/sub.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtracts `b` from `a`.
///
/// Local rule: the left operand receives the output gradient, the right
/// operand receives its negation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), GradFn::Sub(a.clone(), b.clone()))
}

// --- Operator Impls ---

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        // Reflected form rewritten in terms of the defined primitives:
        // b - a as b + (-a).
        self + &rhs.neg()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
