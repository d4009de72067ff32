// src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;
use std::ops::Neg;

// --- Forward Operation ---

/// Arithmetic negation, defined as multiplication by -1.
///
/// The result is an ordinary multiplication node whose right operand is a
/// fresh constant leaf; the gradient to `a` is `-go` through the mul rule.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

// --- Operator Impls ---

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
