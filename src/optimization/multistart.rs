//! Multi-start driver: repeated local search with a global-best reduction.
//!
//! Purpose
//! -------
//! Approximate global minimization of a non-convex deviance surface by
//! running many independent Nelder–Mead searches from randomized starting
//! points and keeping the best result. Periodic and multi-group objectives
//! are multi-modal; a single local search can settle into a poor local
//! minimum, and independent restarts trade compute for a probabilistic
//! guarantee of approaching the global minimum as the restart count grows.
//!
//! Key behaviors
//! -------------
//! - Each trial draws its starting point from the model's sampler using a
//!   private RNG stream seeded as `seed + trial_index`, so the stream is
//!   fixed per trial regardless of scheduling.
//! - Trials run sequentially or on the rayon pool; they share only the
//!   read-only model and dataset, so no locking is needed.
//! - The reduction is an arg-min over `(deviance, trial_index)`: ties
//!   resolve to the first trial in iteration order and the winner is
//!   invariant to the degree of parallelism.
//! - A trial whose solver did not converge still participates in the
//!   reduction with whatever value it returned; the winning trial's
//!   convergence flag is surfaced on the outcome for diagnostics.
//! - One restart behaves identically to a single direct [`minimize`] call
//!   from the same starting point; there is no special-casing.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::data::Dataset;
use crate::models::{DevianceModel, ParameterVector};
use crate::optimization::errors::{FitError, FitResult};
use crate::optimization::minimizer::{minimize, LocalFit, MinimizerOptions};

/// Default number of independent restarts.
pub const DEFAULT_RESTARTS: usize = 50;

/// Driver-level configuration.
///
/// Fields:
/// - `restarts`: number of independent trials, at least 1.
/// - `seed`: base seed for the per-trial RNG streams; a fixed seed makes
///   the whole run deterministic.
/// - `minimizer`: options forwarded to every local search.
/// - `parallel`: dispatch trials on the rayon pool instead of running
///   them in sequence. The selected result is identical either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiStartOptions {
    pub restarts: usize,
    pub seed: u64,
    pub minimizer: MinimizerOptions,
    pub parallel: bool,
}

impl MultiStartOptions {
    /// Construct validated driver options.
    ///
    /// # Errors
    /// Returns [`FitError::InvalidRestartCount`] when `restarts == 0`.
    pub fn new(
        restarts: usize, seed: u64, minimizer: MinimizerOptions, parallel: bool,
    ) -> FitResult<Self> {
        if restarts == 0 {
            return Err(FitError::InvalidRestartCount {
                restarts,
                reason: "At least one restart is required.",
            });
        }
        Ok(Self { restarts, seed, minimizer, parallel })
    }
}

impl Default for MultiStartOptions {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            seed: 0,
            minimizer: MinimizerOptions::default(),
            parallel: true,
        }
    }
}

/// Global-best fit selected across all restarts.
///
/// - `model_id`: identifier of the fitted model.
/// - `parameters`: winning parameter vector, paired with the model's
///   ordered names.
/// - `deviance`: minimum deviance observed across all trials.
/// - `restarts_evaluated`: number of trials performed.
/// - `converged`: the winning trial's solver convergence flag (a
///   documented diagnostic; non-converged winners are not corrected).
/// - `best_trial`: index of the winning trial in iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub model_id: &'static str,
    pub parameters: ParameterVector,
    pub deviance: f64,
    pub restarts_evaluated: usize,
    pub converged: bool,
    pub best_trial: usize,
}

struct Trial {
    index: usize,
    local: LocalFit,
}

/// Run one independent trial: sample a start from the trial's private RNG
/// stream and minimize from it.
fn run_trial<M: DevianceModel>(
    model: &M, data: &Dataset, opts: &MultiStartOptions, index: usize,
) -> FitResult<Trial> {
    let mut rng = SmallRng::seed_from_u64(opts.seed.wrapping_add(index as u64));
    let start = model.sample_initial_guess(&mut rng);
    let local = minimize(model, data, start, &opts.minimizer)?;
    Ok(Trial { index, local })
}

/// Fit `model` to `data` with independent random restarts, returning the
/// global-best result.
///
/// # Behavior
/// - Runs `opts.restarts` trials, each from a freshly sampled starting
///   point with a private RNG stream.
/// - Selects the trial with the minimum deviance; ties resolve to the
///   lowest trial index, so the outcome is deterministic for a fixed seed
///   and invariant to scheduling.
/// - Validates the winning parameter vector (present, finite) before
///   returning, mirroring the solver-outcome discipline of the local
///   layer.
///
/// # Errors
/// - [`FitError::InvalidRestartCount`] when `opts.restarts == 0`.
/// - Propagates solver errors from any trial.
/// - [`FitError::InvalidFittedParameters`] if the winning vector fails
///   validation.
pub fn fit<M: DevianceModel + Sync>(
    model: &M, data: &Dataset, opts: &MultiStartOptions,
) -> FitResult<FitOutcome> {
    if opts.restarts == 0 {
        return Err(FitError::InvalidRestartCount {
            restarts: 0,
            reason: "At least one restart is required.",
        });
    }

    let trials: Vec<Trial> = if opts.parallel {
        (0..opts.restarts)
            .into_par_iter()
            .map(|index| run_trial(model, data, opts, index))
            .collect::<FitResult<Vec<_>>>()?
    } else {
        (0..opts.restarts)
            .map(|index| run_trial(model, data, opts, index))
            .collect::<FitResult<Vec<_>>>()?
    };

    // Commutative min-reduction; the index tiebreak keeps the result
    // independent of scheduling order.
    let best = trials
        .into_iter()
        .min_by(|a, b| {
            a.local.deviance.total_cmp(&b.local.deviance).then(a.index.cmp(&b.index))
        })
        .ok_or(FitError::InvalidRestartCount {
            restarts: 0,
            reason: "At least one restart is required.",
        })?;

    let parameters = ParameterVector::new(model.parameter_names().to_vec(), best.local.theta)?;

    Ok(FitOutcome {
        model_id: model.id(),
        parameters,
        deviance: best.local.deviance,
        restarts_evaluated: opts.restarts,
        converged: best.local.converged,
        best_trial: best.index,
    })
}
