//! models — the candidate model family and its shared likelihood core.
//!
//! Purpose
//! -------
//! House every candidate theory the comparison engine can weigh against
//! each other. Each model differs only in how parameters map to a
//! per-observation mean/variance and whether the population is partitioned
//! into weekday and weekend groups; everything else (the deviance contract,
//! the sampler convention, the sentinel discipline) is uniform and defined
//! once in [`traits`].
//!
//! Key behaviors
//! -------------
//! - [`SingleGaussian`]: one mean, one variance for all rows.
//! - [`FixedPeriodic`] / [`FreePeriodic`]: sinusoidal mean over a
//!   row-position time basis, with the oscillation frequency fixed at 4 or
//!   left free respectively.
//! - [`TwoGroupSeparate`] / [`TwoGroupShared`]: weekday/weekend partition
//!   with group-specific means and either separate or shared variance.
//! - Shared Gaussian log-likelihood accumulation lives in this module so
//!   every variant applies identical feasibility guards.
//!
//! Conventions
//! -----------
//! - Sampling ranges are deliberately wide and, for variance terms,
//!   include infeasible negative values; the sentinel mechanism rejects
//!   them during search. Tightening the ranges changes search dynamics and
//!   is out of scope.
//! - Gaussian densities come from `statrs`; this crate does not hand-roll
//!   probability functions.

pub mod errors;
pub mod gaussian;
pub mod periodic;
pub mod traits;
pub mod two_group;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ModelError, ModelResult};
pub use self::gaussian::SingleGaussian;
pub use self::periodic::{FixedPeriodic, FreePeriodic};
pub use self::traits::{
    Deviance, DevianceModel, ParameterVector, Theta, INFEASIBLE_DEVIANCE,
};
pub use self::two_group::{TwoGroupSeparate, TwoGroupShared};

use statrs::distribution::{Continuous, Normal};

// ---- Shared sampling ranges ------------------------------------------------
//
// One range per parameter role, drawn uniformly and independently. The
// variance range extends below zero on purpose: infeasible draws are
// rejected by the deviance sentinel, not filtered at the sampler.

/// Uniform range for means, intercepts, and amplitudes.
pub(crate) const LEVEL_RANGE: (f64, f64) = (-20.0, 20.0);

/// Uniform range for phase offsets.
pub(crate) const PHASE_RANGE: (f64, f64) = (-std::f64::consts::PI, std::f64::consts::PI);

/// Uniform range for the free oscillation frequency.
pub(crate) const FREQUENCY_RANGE: (f64, f64) = (0.0, 20.0);

/// Uniform range for variance terms; includes infeasible negatives.
pub(crate) const VARIANCE_RANGE: (f64, f64) = (-5.0, 50.0);

// ---- Shared likelihood core -------------------------------------------------

/// Accumulate `Σ ln N(x | mean, sigma²)` over `(x, mean)` pairs.
///
/// Returns `None` when the variance is non-positive or non-finite, when a
/// density cannot be constructed (non-finite mean), or when any
/// log-density is non-finite (zero-density event). Callers convert `None`
/// into [`Deviance::Infeasible`].
#[inline]
pub(crate) fn sum_ln_normal<I>(pairs: I, sigma2: f64) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return None;
    }
    let sigma = sigma2.sqrt();
    let mut total = 0.0;
    for (x, mean) in pairs {
        let normal = Normal::new(mean, sigma).ok()?;
        let ln_p = normal.ln_pdf(x);
        if !ln_p.is_finite() {
            return None;
        }
        total += ln_p;
    }
    Some(total)
}

/// Accumulate `Σ ln N(x | mean, sigma²)` for a constant mean.
///
/// Same guards as [`sum_ln_normal`], constructing the density once.
#[inline]
pub(crate) fn sum_ln_normal_const<I>(values: I, mean: f64, sigma2: f64) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return None;
    }
    let normal = Normal::new(mean, sigma2.sqrt()).ok()?;
    let mut total = 0.0;
    for x in values {
        let ln_p = normal.ln_pdf(x);
        if !ln_p.is_finite() {
            return None;
        }
        total += ln_p;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Feasibility guards in the shared log-likelihood accumulators
    //   (non-positive variance, non-finite mean).
    // - Agreement between the per-pair and constant-mean accumulators.
    //
    // They intentionally DO NOT cover:
    // - Full model deviances; each model file tests its own variant.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure both accumulators reject non-positive and non-finite
    // variances with `None` rather than producing NaN.
    //
    // Given
    // -----
    // - A small sample and sigma² in {0, -1, NaN}.
    //
    // Expect
    // ------
    // - `None` from both helpers in every case.
    fn sum_ln_normal_rejects_degenerate_variance() {
        let xs = [1.0, 2.0, 3.0];

        for sigma2 in [0.0, -1.0, f64::NAN] {
            assert!(sum_ln_normal(xs.iter().map(|&x| (x, 0.0)), sigma2).is_none());
            assert!(sum_ln_normal_const(xs.iter().copied(), 0.0, sigma2).is_none());
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-finite mean is caught instead of propagating through
    // the density.
    //
    // Given
    // -----
    // - One observation with mean = NaN and a valid variance.
    //
    // Expect
    // ------
    // - `None` from the per-pair accumulator.
    fn sum_ln_normal_rejects_non_finite_mean() {
        let result = sum_ln_normal([(1.0, f64::NAN)], 4.0);

        assert!(result.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify the constant-mean fast path agrees with the general
    // accumulator on identical inputs.
    //
    // Given
    // -----
    // - Five observations, mean 3.0, sigma² 2.0.
    //
    // Expect
    // ------
    // - Both helpers return the same finite sum.
    fn sum_ln_normal_const_matches_general_path() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];

        let general = sum_ln_normal(xs.iter().map(|&x| (x, 3.0)), 2.0)
            .expect("valid inputs should accumulate");
        let constant = sum_ln_normal_const(xs.iter().copied(), 3.0, 2.0)
            .expect("valid inputs should accumulate");

        assert_relative_eq!(general, constant, max_relative = 1e-12);
    }
}
