// src/nn/layers/neuron.rs

use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::{Activation, Module};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A single neuron: `activation(sum(w_i * x_i) + b)`.
///
/// Weights are initialized uniformly from [-1, 1] with the caller's RNG;
/// the bias starts at 0. With `activation: None` the neuron is linear.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Option<Activation>,
}

impl Neuron {
    /// Creates a neuron taking `n_inp` inputs.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidDimension`] if `n_inp` is 0.
    pub fn new<R: Rng + ?Sized>(
        n_inp: usize,
        activation: Option<Activation>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if n_inp == 0 {
            return Err(ScalarGradError::InvalidDimension {
                value: 0,
                operation: "Neuron::new".to_string(),
            });
        }
        let weights = (0..n_inp).map(|_| init::uniform(rng, -1.0, 1.0)).collect();
        debug!("Neuron::new: {} input(s), activation {:?}", n_inp, activation);
        Ok(Neuron {
            weights,
            bias: init::zero(),
            activation,
        })
    }

    /// Number of inputs this neuron accepts.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass over one input sample.
    ///
    /// # Errors
    /// [`ScalarGradError::ShapeMismatch`] if `inputs` has a different length
    /// than the weight vector.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = &act + &(w * x);
        }

        Ok(match self.activation {
            Some(a) => a.apply(&act),
            None => act,
        })
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
