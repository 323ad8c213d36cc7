//! Single-Gaussian model: one mean and one variance for every row.
//!
//! The null theory of the family — no periodicity, no weekday/weekend
//! structure. Its parameter space embeds into both two-group variants
//! (force the group means equal), which makes it the canonical restricted
//! model for nested likelihood-ratio tests.

use ndarray::array;
use rand::Rng;

use crate::data::Dataset;
use crate::models::{
    sum_ln_normal_const, Deviance, DevianceModel, Theta, LEVEL_RANGE, VARIANCE_RANGE,
};

const PARAMETER_NAMES: &[&str] = &["mu", "sigma2"];

/// Constant-mean Gaussian over all observations.
///
/// Theta layout: `[mu, sigma2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleGaussian;

impl DevianceModel for SingleGaussian {
    fn id(&self) -> &'static str {
        "single-gaussian"
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    /// `−2 · Σ ln N(count_i | mu, sigma²)`.
    ///
    /// Infeasible for a wrong-length probe, non-positive variance, or any
    /// zero-density event.
    fn deviance(&self, theta: &Theta, data: &Dataset) -> Deviance {
        if theta.len() != PARAMETER_NAMES.len() {
            return Deviance::Infeasible;
        }
        let (mu, sigma2) = (theta[0], theta[1]);
        let counts = data.observations().iter().map(|o| o.count as f64);
        match sum_ln_normal_const(counts, mu, sigma2) {
            Some(ln_lik) => Deviance::feasible(-2.0 * ln_lik),
            None => Deviance::Infeasible,
        }
    }

    /// `mu` from [`LEVEL_RANGE`], `sigma2` from [`VARIANCE_RANGE`] (which
    /// includes infeasible negatives on purpose).
    fn sample_initial_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Theta {
        array![
            rng.gen_range(LEVEL_RANGE.0..LEVEL_RANGE.1),
            rng.gen_range(VARIANCE_RANGE.0..VARIANCE_RANGE.1),
        ]
    }
}
