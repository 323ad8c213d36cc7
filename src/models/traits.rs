//! Model-family contract: deviance evaluation and initial-guess sampling.
//!
//! Purpose
//! -------
//! Define the capability set every candidate model implements so that the
//! multi-start driver and the comparison engine stay generic over the model
//! family: an identifier, ordered parameter names, a deviance function over
//! `(Theta, Dataset)`, and a randomized initial-guess sampler.
//!
//! Key behaviors
//! -------------
//! - [`Deviance`] is a tagged result distinguishing a finite deviance value
//!   from an undefined one, so internal logic never confuses "very bad fit"
//!   with "no feasible likelihood here".
//! - [`Deviance::into_objective`] converts to the numeric sentinel
//!   [`INFEASIBLE_DEVIANCE`] exactly once, at the boundary the external
//!   minimizer requires; infeasibility is data, never an error or a NaN.
//! - [`ParameterVector`] pairs a fitted value vector with its model's
//!   ordered parameter names for name-based lookup downstream.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Deviance::Feasible` always wraps a finite value; the smart
//!   constructor [`Deviance::feasible`] demotes NaN/±∞ to `Infeasible`.
//! - Models are stateless: `deviance` is pure, `sample_initial_guess`
//!   draws independently on every call with no memoization, and both may
//!   be invoked concurrently without synchronization.
//!
//! Conventions
//! -----------
//! - `Theta` is the canonical unconstrained parameter type
//!   (`ndarray::Array1<f64>`); every model documents its theta layout and
//!   the order must match `parameter_names()`.
//! - A structurally invalid probe (wrong theta length) is infeasible, not
//!   an error: the optimizer is free to wander and gets a large finite
//!   objective back.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the sentinel conversion, the demotion of non-finite
//!   feasible values, and `ParameterVector` construction and lookup.

use ndarray::Array1;
use rand::Rng;

use crate::data::Dataset;
use crate::models::errors::{validate_theta, ModelError, ModelResult};

/// Parameter vector `θ` in unconstrained optimizer space.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the model and optimization layers.
pub type Theta = Array1<f64>;

/// Numeric sentinel standing in for an undefined deviance at the minimizer
/// boundary.
///
/// The external minimizer sees this as an ordinary (large) objective value,
/// so searches that probe infeasible regions degrade gracefully instead of
/// failing. Internal code uses [`Deviance::Infeasible`] and converts here
/// only via [`Deviance::into_objective`].
pub const INFEASIBLE_DEVIANCE: f64 = 1.0e7;

/// Tagged deviance result: a finite value or an undefined likelihood.
///
/// Produced by every [`DevianceModel::deviance`] implementation. The two
/// cases are kept distinct internally; the numeric sentinel only appears
/// where the optimizer demands a plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviance {
    /// A finite deviance value (−2 · log-likelihood).
    Feasible(f64),
    /// No feasible likelihood at this parameter vector (non-positive
    /// variance, zero-density event, or a structurally invalid probe).
    Infeasible,
}

impl Deviance {
    /// Wrap a computed deviance, demoting non-finite values to
    /// [`Deviance::Infeasible`].
    ///
    /// This is the single choke point that keeps NaN and infinity out of
    /// every code path visible to the driver and the comparison engine.
    pub fn feasible(value: f64) -> Self {
        if value.is_finite() { Deviance::Feasible(value) } else { Deviance::Infeasible }
    }

    /// `true` for the `Feasible` case.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Deviance::Feasible(_))
    }

    /// Convert to the plain objective value the external minimizer
    /// consumes: the wrapped value, or [`INFEASIBLE_DEVIANCE`].
    pub fn into_objective(self) -> f64 {
        match self {
            Deviance::Feasible(value) => value,
            Deviance::Infeasible => INFEASIBLE_DEVIANCE,
        }
    }
}

/// Fitted parameters paired with their model's ordered names.
///
/// Size is fixed per model variant; the value order matches
/// [`DevianceModel::parameter_names`]. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterVector {
    names: Vec<&'static str>,
    values: Theta,
}

impl ParameterVector {
    /// Pair ordered parameter names with a fitted value vector.
    ///
    /// # Errors
    /// - [`ModelError::ParameterLengthMismatch`] when the lengths disagree.
    /// - [`ModelError::NonFiniteParameter`] when any value is NaN or ±∞;
    ///   fitted vectors handed to callers must be finite.
    pub fn new(names: Vec<&'static str>, values: Theta) -> ModelResult<Self> {
        if names.len() != values.len() {
            return Err(ModelError::ParameterLengthMismatch {
                expected: names.len(),
                actual: values.len(),
            });
        }
        validate_theta(&values)?;
        Ok(ParameterVector { names, values })
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names.iter().position(|&n| n == name).map(|i| self.values[i])
    }

    /// Ordered parameter names.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Fitted values, in the same order as [`Self::names`].
    pub fn values(&self) -> &Theta {
        &self.values
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the vector has no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Capability set implemented by every candidate model.
///
/// Implementations are stateless value types: `deviance` is a pure
/// function of `(theta, data)` with no observable side effects, and
/// `sample_initial_guess` draws a fresh, independent starting point on
/// every call. Both the multi-start driver and the comparison engine are
/// generic over this trait instead of re-deriving parameter counts or
/// partition rules at call sites.
pub trait DevianceModel {
    /// Short, stable identifier for reporting.
    fn id(&self) -> &'static str;

    /// Ordered parameter names; defines the theta layout.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Number of free parameters (the BIC `k`).
    fn parameter_count(&self) -> usize {
        self.parameter_names().len()
    }

    /// Evaluate `−2 · Σ ln p(count_i | θ)` over the dataset.
    ///
    /// Must return [`Deviance::Infeasible`] — never NaN, infinity, or an
    /// error — for structurally invalid probes, non-positive variances,
    /// and zero-density events.
    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance;

    /// Draw one random starting point, each coordinate from its documented
    /// model-specific uniform range.
    ///
    /// Variance ranges deliberately include infeasible negative values;
    /// rejection is the sentinel mechanism's job downstream, not the
    /// sampler's.
    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta;
}
