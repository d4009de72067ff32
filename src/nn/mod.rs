// src/nn/mod.rs
// Neural-network composition layer over the scalar engine: neurons, layers,
// multilayer perceptrons, and the parameter / gradient-reset conventions.

pub mod init;
pub mod layers;
pub mod mlp;
pub mod module;

// Re-export common items
pub use layers::{Layer, Neuron};
pub use mlp::Mlp;
pub use module::{Activation, Module};
