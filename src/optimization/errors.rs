use argmin::core::{ArgminError, Error};

use crate::models::errors::ModelError;

/// Crate-wide result alias for optimizer operations.
pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Options ----
    /// Simplex standard-deviation tolerance needs to be positive and finite.
    InvalidSdTolerance {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: u64,
        reason: &'static str,
    },
    /// At least one restart is required.
    InvalidRestartCount {
        restarts: usize,
        reason: &'static str,
    },

    // ---- Local minimizer ----
    /// A simplex cannot be built from an empty starting point.
    EmptyStartPoint,
    /// The solver finished without a best parameter vector.
    MissingBestParameter,
    /// The solver reported a non-finite best objective value.
    NonFiniteBestValue {
        value: f64,
    },

    // ---- Driver outcome ----
    /// The winning trial's parameter vector failed validation.
    InvalidFittedParameters {
        text: String,
    },

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            FitError::InvalidSdTolerance { tol, reason } => {
                write!(f, "Invalid simplex tolerance {tol}: {reason}")
            }
            FitError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            FitError::InvalidRestartCount { restarts, reason } => {
                write!(f, "Invalid restart count {restarts}: {reason}")
            }

            // ---- Local minimizer ----
            FitError::EmptyStartPoint => {
                write!(f, "Starting point must contain at least one parameter")
            }
            FitError::MissingBestParameter => {
                write!(f, "Missing best parameter vector from the solver")
            }
            FitError::NonFiniteBestValue { value } => {
                write!(f, "Non-finite best objective value: {value}")
            }

            // ---- Driver outcome ----
            FitError::InvalidFittedParameters { text } => {
                write!(f, "Invalid fitted parameters: {text}")
            }

            // ---- Argmin ----
            FitError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            FitError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            FitError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            FitError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            FitError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            FitError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            FitError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            FitError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            FitError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for FitError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => FitError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => FitError::NotImplemented { text },
                ArgminError::NotInitialized { text } => FitError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => FitError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => FitError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => FitError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => FitError::ImpossibleError { text },
                _ => FitError::UnknownError,
            },
            Err(err) => FitError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ModelError> for FitError {
    fn from(err: ModelError) -> Self {
        FitError::InvalidFittedParameters { text: err.to_string() }
    }
}
