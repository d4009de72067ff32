use thiserror::Error;

/// Custom error type for the scalargrad crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid dimension {value} for operation {operation}")]
    InvalidDimension { value: usize, operation: String },

    #[error(
        "Gradient check failed for input {input_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})"
    )]
    GradCheckFailed {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}: loss+ {loss_plus}, loss- {loss_minus}")]
    GradCheckNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
}
