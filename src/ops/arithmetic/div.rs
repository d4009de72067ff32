// src/ops/arithmetic/div.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;
use std::ops::Div;

// --- Forward Operation ---

/// Divides `a` by `b`.
///
/// Local rule: `go / b` to the numerator, `-a * go / b²` to the denominator.
/// A zero-valued denominator is not checked: the forward value and both
/// gradient contributions follow IEEE semantics (inf / NaN flow through).
pub fn div_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() / b.data(), GradFn::Div(a.clone(), b.clone()))
}

// --- Operator Impls ---

impl Div for &Value {
    type Output = Value;

    fn div(self, rhs: Self) -> Value {
        div_op(self, rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        div_op(self, &Value::new(rhs))
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        div_op(&Value::new(self), rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
