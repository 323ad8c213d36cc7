//! BIC and the Bayes-factor approximation for non-nested model pairs.
//!
//! Purpose
//! -------
//! Convert raw fit quality into comparable evidence when neither model's
//! parameter space embeds into the other's. Each fit's deviance is
//! penalized by `ln(n)·k` to form a Bayesian Information Criterion, and
//! the BIC difference yields an approximate Bayes factor. This statistic
//! never produces an exact p-value; for nested pairs use the
//! likelihood-ratio test instead.
//!
//! Conventions
//! -----------
//! - Lower BIC is better. `BF(A relative to B) = exp((BIC_A − BIC_B)/2)`,
//!   so `BF > 1` favors B.
//! - Symmetry holds by construction: `BF(A, B) = 1 / BF(B, A)`.
//! - An exactly equal BIC prefers model A (the first argument),
//!   consistent with the driver's first-wins tie rule.

use crate::comparison::errors::{CompareError, CompareResult};
use crate::optimization::FitOutcome;

/// Which model a comparison favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    ModelA,
    ModelB,
}

/// Outcome of a non-nested BIC/Bayes-factor comparison.
///
/// Fields
/// ------
/// - `bic_a` / `bic_b`: penalized deviances of the two fits.
/// - `bayes_factor`: `exp((BIC_A − BIC_B)/2)`; values above 1 favor B.
/// - `parameter_delta`: `k_A − k_B`, for reporting.
/// - `preferred`: the model with the lower BIC; ties go to A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BayesComparison {
    pub bic_a: f64,
    pub bic_b: f64,
    pub bayes_factor: f64,
    pub parameter_delta: i64,
    pub preferred: Preference,
}

/// Bayesian Information Criterion: `deviance + ln(n)·k`.
///
/// # Errors
/// - [`CompareError::InvalidObservationCount`] when `n_obs == 0`.
/// - [`CompareError::NonFiniteDeviance`] when the deviance is NaN or ±∞.
pub fn bic(deviance: f64, n_obs: usize, parameter_count: usize) -> CompareResult<f64> {
    if n_obs == 0 {
        return Err(CompareError::InvalidObservationCount { n_obs });
    }
    if !deviance.is_finite() {
        return Err(CompareError::NonFiniteDeviance { value: deviance });
    }
    Ok(deviance + (n_obs as f64).ln() * parameter_count as f64)
}

/// Compare two non-nested fits through the BIC-based Bayes-factor
/// approximation.
///
/// Parameter counts are taken from each fit's parameter vector, and
/// `n_obs` is the shared observation count both fits were evaluated on.
///
/// # Errors
/// Propagates the validation errors of [`bic`] for either fit.
pub fn bayes_factor_bic(
    fit_a: &FitOutcome, fit_b: &FitOutcome, n_obs: usize,
) -> CompareResult<BayesComparison> {
    let k_a = fit_a.parameters.len();
    let k_b = fit_b.parameters.len();
    let bic_a = bic(fit_a.deviance, n_obs, k_a)?;
    let bic_b = bic(fit_b.deviance, n_obs, k_b)?;

    let bayes_factor = ((bic_a - bic_b) / 2.0).exp();
    let preferred = if bic_b < bic_a { Preference::ModelB } else { Preference::ModelA };

    Ok(BayesComparison {
        bic_a,
        bic_b,
        bayes_factor,
        parameter_delta: k_a as i64 - k_b as i64,
        preferred,
    })
}
