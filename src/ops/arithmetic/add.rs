// src/ops/arithmetic/add.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two values, recording both operands for the backward pass.
///
/// Local rule: each operand receives the output gradient unchanged.
/// When both operands are the same node (`x + x`), that node is credited
/// once per slot, i.e. twice.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), GradFn::Add(a.clone(), b.clone()))
}

// --- Operator Impls ---

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Value {
        add_op(self, rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(&Value::new(self), rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
