//! Two-group Gaussian models over the weekday/weekend partition.
//!
//! Purpose
//! -------
//! Model a level shift between weekdays (day-of-week 2..=6) and weekends
//! (day-of-week 1 or 7). Two variants: [`TwoGroupSeparate`] gives each
//! group its own variance, [`TwoGroupShared`] constrains both groups to a
//! common variance. The shared-variance variant is nested inside the
//! separate-variance one (equate the variances, df = 1), and the
//! single-Gaussian model is nested inside the shared-variance one (equate
//! the means, df = 1).
//!
//! Conventions
//! -----------
//! - The combined deviance is the sum of both groups' log-likelihood
//!   contributions scaled by −2 once, not per group.
//! - An empty group contributes zero log-likelihood; its parameters are
//!   then unidentified but the evaluation stays well-defined.

use ndarray::array;
use rand::Rng;

use crate::data::Dataset;
use crate::models::{
    sum_ln_normal_const, Deviance, DevianceModel, Theta, LEVEL_RANGE, VARIANCE_RANGE,
};

const SEPARATE_PARAMETER_NAMES: &[&str] =
    &["mu_weekday", "sigma2_weekday", "mu_weekend", "sigma2_weekend"];
const SHARED_PARAMETER_NAMES: &[&str] = &["mu_weekday", "mu_weekend", "sigma2"];

/// Sum both groups' log-likelihood contributions under group-specific
/// means and variances.
#[inline]
fn two_group_ln_lik(
    data: &Dataset, mu_weekday: f64, sigma2_weekday: f64, mu_weekend: f64, sigma2_weekend: f64,
) -> Option<f64> {
    let weekday = data
        .observations()
        .iter()
        .filter(|o| !o.is_weekend())
        .map(|o| o.count as f64);
    let weekend = data
        .observations()
        .iter()
        .filter(|o| o.is_weekend())
        .map(|o| o.count as f64);

    let ln_weekday = sum_ln_normal_const(weekday, mu_weekday, sigma2_weekday)?;
    let ln_weekend = sum_ln_normal_const(weekend, mu_weekend, sigma2_weekend)?;
    Some(ln_weekday + ln_weekend)
}

/// Weekday/weekend Gaussians with separate variances.
///
/// Theta layout: `[mu_weekday, sigma2_weekday, mu_weekend, sigma2_weekend]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoGroupSeparate;

impl DevianceModel for TwoGroupSeparate {
    fn id(&self) -> &'static str {
        "two-group-separate-variance"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        SEPARATE_PARAMETER_NAMES
    }

    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance {
        if theta.len() != SEPARATE_PARAMETER_NAMES.len() {
            return Deviance::Infeasible;
        }
        match two_group_ln_lik(data, theta[0], theta[1], theta[2], theta[3]) {
            Some(ln_lik) => Deviance::feasible(-2.0 * ln_lik),
            None => Deviance::Infeasible,
        }
    }

    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta {
        array![
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
        ]
    }
}

/// Weekday/weekend Gaussians with a shared variance.
///
/// Theta layout: `[mu_weekday, mu_weekend, sigma2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoGroupShared;

impl DevianceModel for TwoGroupShared {
    fn id(&self) -> &'static str {
        "two-group-shared-variance"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        SHARED_PARAMETER_NAMES
    }

    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance {
        if theta.len() != SHARED_PARAMETER_NAMES.len() {
            return Deviance::Infeasible;
        }
        match two_group_ln_lik(data, theta[0], theta[2], theta[1], theta[2]) {
            Some(ln_lik) => Deviance::feasible(-2.0 * ln_lik),
            None => Deviance::Infeasible,
        }
    }

    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta {
        array![
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
        ]
    }
}
