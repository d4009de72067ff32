// src/nn/module.rs

use crate::value::Value;

/// Non-linearity applied by a neuron after its affine combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Tanh,
    Relu,
}

impl Activation {
    pub(crate) fn apply(self, v: &Value) -> Value {
        match self {
            Activation::Tanh => v.tanh(),
            Activation::Relu => v.relu(),
        }
    }
}

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module is anything that owns a collection of learnable parameter nodes.
/// Parameters are leaf `Value`s; handing them out lets an external training
/// loop read gradients after a backward pass and update `data` in place.
pub trait Module: std::fmt::Debug {
    /// Returns handles to every learnable parameter of the module,
    /// including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient accumulator of every parameter to 0.
    ///
    /// Gradients accumulate across backward passes and are never cleared
    /// implicitly, so this must run before each pass that expects fresh
    /// gradients.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[derive(Debug)]
    struct MockModule {
        params: Vec<Value>,
    }

    impl Module for MockModule {
        fn parameters(&self) -> Vec<Value> {
            self.params.clone()
        }
    }

    #[test]
    fn test_zero_grad_resets_all_parameters() {
        let module = MockModule {
            params: vec![Value::new(1.0), Value::new(2.0)],
        };
        for p in module.parameters() {
            p.accumulate_grad(5.0);
        }
        module.zero_grad();
        assert!(module.parameters().iter().all(|p| p.grad() == 0.0));
    }

    #[test]
    fn test_activation_apply() {
        let v = Value::new(-2.0);
        assert_eq!(Activation::Relu.apply(&v).data(), 0.0);
        assert_eq!(Activation::Tanh.apply(&v).data(), (-2.0f64).tanh());
    }
}
