//! Periodic models: sinusoidal mean over a row-position time basis.
//!
//! Purpose
//! -------
//! Model a weekly-style oscillation in the count series with a Gaussian
//! noise floor. Two variants: [`FixedPeriodic`] pins the oscillation
//! frequency at 4 cycles over the series, [`FreePeriodic`] estimates it.
//!
//! Conventions
//! -----------
//! - The time value for row `i` is `t_i = 2π · i / (n − 1)`, derived from
//!   sequence *position*, not from the calendar fields. The basis silently
//!   misbehaves if rows are not contiguous daily records or contain gaps;
//!   callers own that precondition.
//! - Mean function: `intercept + amplitude · sin(phase + frequency · t_i)`.

use ndarray::array;
use rand::Rng;

use crate::data::Dataset;
use crate::models::{
    sum_ln_normal, Deviance, DevianceModel, Theta, FREQUENCY_RANGE, LEVEL_RANGE, PHASE_RANGE,
    VARIANCE_RANGE,
};

const FIXED_PARAMETER_NAMES: &[&str] = &["intercept", "amplitude", "phase", "sigma2"];
const FREE_PARAMETER_NAMES: &[&str] = &["intercept", "amplitude", "phase", "frequency", "sigma2"];

/// Oscillation frequency used by [`FixedPeriodic`].
const FIXED_FREQUENCY: f64 = 4.0;

/// Normalized time value for row `i` of an `n`-row series.
///
/// `t_i = 2π · i / (n − 1)`; the denominator is clamped to 1 so a
/// single-row series evaluates at `t = 0` instead of dividing by zero.
#[inline]
fn row_time(i: usize, n: usize) -> f64 {
    let denom = n.saturating_sub(1).max(1) as f64;
    2.0 * std::f64::consts::PI * (i as f64) / denom
}

/// Evaluate the sinusoidal-mean deviance shared by both variants.
#[inline]
fn periodic_deviance(
    data: &Dataset, intercept: f64, amplitude: f64, phase: f64, frequency: f64, sigma2: f64,
) -> Deviance {
    let n = data.len();
    let pairs = data.observations().iter().enumerate().map(|(i, obs)| {
        let mean = intercept + amplitude * (phase + frequency * row_time(i, n)).sin();
        (obs.count as f64, mean)
    });
    match sum_ln_normal(pairs, sigma2) {
        Some(ln_lik) => Deviance::feasible(-2.0 * ln_lik),
        None => Deviance::Infeasible,
    }
}

/// Sinusoidal mean with the frequency fixed at 4 cycles per series.
///
/// Theta layout: `[intercept, amplitude, phase, sigma2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPeriodic;

impl DevianceModel for FixedPeriodic {
    fn id(&self) -> &'static str {
        "periodic-fixed-frequency"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        FIXED_PARAMETER_NAMES
    }

    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance {
        if theta.len() != FIXED_PARAMETER_NAMES.len() {
            return Deviance::Infeasible;
        }
        periodic_deviance(data, theta[0], theta[1], theta[2], FIXED_FREQUENCY, theta[3])
    }

    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta {
        array![
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(PHASE_RANGE.0..PHASE_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
        ]
    }
}

/// Sinusoidal mean with a free oscillation frequency.
///
/// Theta layout: `[intercept, amplitude, phase, frequency, sigma2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreePeriodic;

impl DevianceModel for FreePeriodic {
    fn id(&self) -> &'static str {
        "periodic-free-frequency"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        FREE_PARAMETER_NAMES
    }

    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance {
        if theta.len() != FREE_PARAMETER_NAMES.len() {
            return Deviance::Infeasible;
        }
        periodic_deviance(data, theta[0], theta[1], theta[2], theta[3], theta[4])
    }

    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta {
        array![
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(PHASE_RANGE.0..PHASE_RANGE.1),
            rng.gen_range(FREQUENCY_RANGE.0..FREQUENCY_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
        ]
    }
}
