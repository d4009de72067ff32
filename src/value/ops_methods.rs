// src/value/ops_methods.rs
//
// Method-style entry points delegating to the `_op` functions, so callers
// can chain naturally: `(&x * &w).tanh()`.

use super::Value;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{neg_op, pow_op};
use crate::ops::math_elem::exp_op;

impl Value {
    /// Raises this value to a fixed real exponent `k` (`self ** k`).
    ///
    /// The exponent is a plain `f64`, never another `Value`: only constant
    /// exponents are differentiable here, and the signature rejects anything
    /// else at the call site.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// e^self. Overflow propagates as `inf` through data and gradients.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    /// Hyperbolic tangent of this value.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    /// Rectified linear unit: `self` if positive, else 0.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    /// Arithmetic negation, recorded as multiplication by -1.
    pub fn neg(&self) -> Value {
        neg_op(self)
    }
}
