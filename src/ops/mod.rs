//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the closed operation set of the engine. Operations are
//! grouped by category:
//!
//! - [`arithmetic`]: add, sub, neg, mul, div, pow.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: element-wise math (exp).
//!
//! Each operation has a core `xxx_op` function that computes the forward
//! value eagerly and wires the result node's gradient rule (a `GradFn`
//! variant) for the backward pass. The `std::ops` operator impls for
//! `&Value` (including mixed `f64` operands, which are wrapped into
//! constant leaf nodes) live next to the `_op` function they delegate to.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
