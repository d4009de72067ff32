// src/nn/layers/layer.rs

use crate::error::ScalarGradError;
use crate::nn::layers::Neuron;
use crate::nn::module::{Activation, Module};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A fully-connected layer: `n_out` independent neurons over the same input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer mapping `n_inp` inputs to `n_out` outputs, every
    /// neuron sharing the same activation choice.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidDimension`] if either dimension is 0.
    pub fn new<R: Rng + ?Sized>(
        n_inp: usize,
        n_out: usize,
        activation: Option<Activation>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if n_out == 0 {
            return Err(ScalarGradError::InvalidDimension {
                value: 0,
                operation: "Layer::new".to_string(),
            });
        }
        let neurons = (0..n_out)
            .map(|_| Neuron::new(n_inp, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Layer::new: {} -> {}", n_inp, n_out);
        Ok(Layer { neurons })
    }

    /// Number of inputs each neuron accepts.
    pub fn n_inputs(&self) -> usize {
        self.neurons[0].n_inputs()
    }

    /// Number of outputs (neurons).
    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    /// Forward pass: one output per neuron.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}
