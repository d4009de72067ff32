//! # Activation Functions
//!
//! Non-linear activations used by the composition layer: the original
//! engine supports tanh and ReLU, selectable per neuron.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
