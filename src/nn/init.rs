// src/nn/init.rs

use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates a leaf parameter node drawn uniformly from `[low, high]`.
///
/// The randomness source is an explicit, caller-supplied `Rng` rather than
/// ambient global state, so parameter initialization is reproducible from a
/// seeded generator.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Value {
    let dist = Uniform::new_inclusive(low, high);
    Value::new(dist.sample(rng))
}

/// Creates a leaf parameter node fixed at 0 (the bias convention of the
/// original network layer).
pub fn zero() -> Value {
    Value::new(0.0)
}
