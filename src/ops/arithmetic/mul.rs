// src/ops/arithmetic/mul.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two values.
///
/// Local rule: each operand receives the other operand's forward value times
/// the output gradient.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), GradFn::Mul(a.clone(), b.clone()))
}

// --- Operator Impls ---

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(&Value::new(self), rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
