// src/autograd/grad_check.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its expression from `inputs` on every call (the graph
/// is rebuilt per forward pass; nodes are not recomputed in place). The
/// inputs are zeroed, `func`'s output is backpropagated, and each input's
/// accumulated gradient is compared against
/// `(f(x + eps) - f(x - eps)) / (2 eps)`.
///
/// # Arguments
/// * `func`: Forward function mapping the input nodes to a scalar output.
/// * `inputs`: Leaf nodes to perturb. Perturbed in place and restored.
/// * `epsilon`: Finite-difference step.
/// * `tolerance`: Accepted absolute and relative deviation.
///
/// # Errors
/// [`ScalarGradError::GradCheckFailed`] on the first disagreeing input, or
/// [`ScalarGradError::GradCheckNonFinite`] if a perturbed forward pass
/// produces a non-finite loss.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), ScalarGradError>
where
    F: Fn(&[Value]) -> Value,
{
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs);
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    for (input_index, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs).data();
        input.set_data(original - epsilon);
        let loss_minus = func(inputs).data();
        input.set_data(original);

        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(ScalarGradError::GradCheckNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical[input_index];
        debug!(
            "check_grad input {}: analytical {} vs numerical {}",
            input_index, analytical_grad, numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(ScalarGradError::GradCheckFailed {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}
