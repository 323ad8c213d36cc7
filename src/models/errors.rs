use crate::models::Theta;

/// Crate-wide result alias for model-layer operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Error conditions raised at model-layer configuration boundaries.
///
/// The deviance hot path never raises these; an optimizer probe with the
/// wrong shape degrades to an infeasible deviance instead. These errors
/// cover explicit constructions such as [`crate::models::ParameterVector`].
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Parameter name list and value vector lengths disagree.
    ParameterLengthMismatch { expected: usize, actual: usize },

    /// A value in a parameter vector is NaN or infinite.
    NonFiniteParameter { index: usize, value: f64 },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ParameterLengthMismatch { expected, actual } => {
                write!(f, "Parameter length mismatch: expected {expected}, actual {actual}")
            }
            ModelError::NonFiniteParameter { index, value } => {
                write!(f, "Invalid parameter at index {index}: {value}, must be finite")
            }
        }
    }
}

/// Validate that a fitted parameter vector is finite in every coordinate.
///
/// # Errors
/// Returns [`ModelError::NonFiniteParameter`] with the first offending
/// index and value.
pub fn validate_theta(theta: &Theta) -> ModelResult<()> {
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteParameter { index, value });
        }
    }
    Ok(())
}
