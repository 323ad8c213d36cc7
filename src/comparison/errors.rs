//! comparison::errors — shared error types for the comparison engine.
//!
//! Per-evaluation failures never reach this module: deviance degradation
//! is handled as data inside the models. These errors are raised only at
//! configuration boundaries — a malformed nesting declaration, a
//! non-finite deviance handed in from outside, or an invalid alpha — and
//! abort the comparison instead of silently computing a statistic.

/// Crate-wide result alias for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Error conditions for the model-comparison engine.
///
/// Variants
/// --------
/// - `InvalidObservationCount`: BIC requires at least one observation.
/// - `NonFiniteDeviance`: a fit handed to the engine carries a NaN or
///   infinite deviance; upstream contracts should make this impossible.
/// - `NoParameterReduction`: nested mode requires `k_full > k_restricted`.
/// - `EmptyNesting` / `EmptyEquateSet`: the constraint mapping must be
///   explicit and non-trivial.
/// - `UnknownParameter` / `DuplicateConstraint`: every constrained name
///   must exist in the full model's parameter list, at most once.
/// - `DegreesOfFreedomMismatch`: the declared constraints must account
///   exactly for the parameter-count difference.
/// - `InvalidAlpha`: the significance level must lie strictly in (0, 1).
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    InvalidObservationCount {
        n_obs: usize,
    },
    NonFiniteDeviance {
        value: f64,
    },
    NoParameterReduction {
        k_full: usize,
        k_restricted: usize,
    },
    EmptyNesting,
    EmptyEquateSet {
        len: usize,
    },
    UnknownParameter {
        name: String,
    },
    DuplicateConstraint {
        name: String,
    },
    DegreesOfFreedomMismatch {
        implied: usize,
        expected: usize,
    },
    InvalidAlpha {
        alpha: f64,
        reason: &'static str,
    },
}

impl std::error::Error for CompareError {}

impl std::fmt::Display for CompareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareError::InvalidObservationCount { n_obs } => {
                write!(f, "Invalid observation count {n_obs}: must be at least 1")
            }
            CompareError::NonFiniteDeviance { value } => {
                write!(f, "Non-finite deviance {value}: fits handed to the engine must be finite")
            }
            CompareError::NoParameterReduction { k_full, k_restricted } => {
                write!(
                    f,
                    "No parameter reduction: full model has {k_full} parameters, \
                     restricted has {k_restricted}; nesting requires k_full > k_restricted"
                )
            }
            CompareError::EmptyNesting => {
                write!(f, "Nesting declaration must contain at least one constraint")
            }
            CompareError::EmptyEquateSet { len } => {
                write!(f, "Equate constraint needs at least two parameter names, got {len}")
            }
            CompareError::UnknownParameter { name } => {
                write!(f, "Unknown parameter '{name}': not in the full model's parameter list")
            }
            CompareError::DuplicateConstraint { name } => {
                write!(f, "Parameter '{name}' is referenced by more than one constraint")
            }
            CompareError::DegreesOfFreedomMismatch { implied, expected } => {
                write!(
                    f,
                    "Constraints imply {implied} degrees of freedom but the parameter-count \
                     difference is {expected}"
                )
            }
            CompareError::InvalidAlpha { alpha, reason } => {
                write!(f, "Invalid significance level {alpha}: {reason}")
            }
        }
    }
}
