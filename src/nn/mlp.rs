// src/nn/mlp.rs

use crate::error::ScalarGradError;
use crate::nn::layers::Layer;
use crate::nn::module::{Activation, Module};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A multilayer perceptron: a chain of fully-connected layers.
///
/// Hidden layers apply the configured activation; the output layer is
/// linear, leaving any final non-linearity (or loss) to the caller.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `n_inp` inputs through layers of the given
    /// sizes; `layer_sizes.last()` is the output width.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidDimension`] if `layer_sizes` is empty or
    /// any size is 0.
    pub fn new<R: Rng + ?Sized>(
        n_inp: usize,
        layer_sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidDimension {
                value: 0,
                operation: "Mlp::new".to_string(),
            });
        }

        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(n_inp);
        sizes.extend_from_slice(layer_sizes);

        let last = layer_sizes.len() - 1;
        let layers = (0..layer_sizes.len())
            .map(|i| {
                let act = if i == last { None } else { Some(activation) };
                Layer::new(sizes[i], sizes[i + 1], act, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Mlp::new: sizes {:?}", sizes);
        Ok(Mlp { layers })
    }

    /// Forward pass through every layer in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}
