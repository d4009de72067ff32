//! # Element-wise Math Functions
//!
//! Scalar transcendental operations that are neither arithmetic primitives
//! nor activations.

pub mod exp;

pub use exp::exp_op;
