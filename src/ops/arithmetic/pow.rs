// src/ops/arithmetic/pow.rs

use crate::autograd::grad_fn::GradFn;
use crate::value::Value;

// --- Forward Operation ---

/// Raises `base` to a fixed real exponent: `base ** exponent`.
///
/// The exponent is a plain `f64` by signature: only constant exponents are
/// supported, so a `Value` exponent is rejected at construction (it does not
/// type-check; nothing silently coerces). The exponent itself is therefore
/// not a graph node and receives no gradient.
///
/// Local rule to the base: `k * base^(k-1) * go`.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        GradFn::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
