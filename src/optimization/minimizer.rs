//! Local minimization of a model's deviance with argmin's Nelder–Mead.
//!
//! This is the crate's bridge to the external derivative-free minimizer.
//! [`DevianceProblem`] exposes a model's deviance as an argmin cost
//! function, converting infeasible evaluations to the numeric sentinel so
//! the solver only ever sees ordinary (large) finite objective values.
//! [`minimize`] builds the initial simplex around a starting point, runs
//! the solver, and normalizes the final state into a [`LocalFit`].

use argmin::core::{CostFunction, Error, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;

use crate::data::Dataset;
use crate::models::{DevianceModel, Theta};
use crate::optimization::errors::{FitError, FitResult};

/// Default simplex standard-deviation tolerance.
pub const DEFAULT_SD_TOLERANCE: f64 = 1e-8;

/// Default iteration cap per local search.
pub const DEFAULT_MAX_ITER: u64 = 1_000;

/// Relative perturbation applied to each coordinate when building the
/// initial simplex.
const SIMPLEX_STEP: f64 = 0.05;

/// Absolute perturbation used for coordinates too close to zero for a
/// relative step to move them.
const SIMPLEX_ZERO_STEP: f64 = 2.5e-4;

/// Bridges a [`DevianceModel`] and a [`Dataset`] to argmin's
/// [`CostFunction`].
///
/// The cost is the sentinel-mapped deviance: always finite, so this
/// adapter never raises from the hot path. Infeasible probes come back as
/// the large sentinel value and the solver walks away from them on its
/// own.
#[derive(Debug, Clone)]
pub struct DevianceProblem<'a, M: DevianceModel> {
    pub model: &'a M,
    pub data: &'a Dataset,
}

impl<'a, M: DevianceModel> DevianceProblem<'a, M> {
    /// Construct a new adapter over a model and its dataset.
    pub fn new(model: &'a M, data: &'a Dataset) -> Self {
        Self { model, data }
    }
}

impl<'a, M: DevianceModel> CostFunction for DevianceProblem<'a, M> {
    type Param = Theta;
    type Output = f64;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.model.deviance(theta, self.data).into_objective())
    }
}

/// Configuration for one Nelder–Mead run.
///
/// Fields:
/// - `sd_tolerance`: terminate when the standard deviation of the simplex
///   vertices' objective values falls below this threshold.
/// - `max_iter`: hard cap on solver iterations.
/// - `verbose`: if `true`, attaches a terminal observer (behind the
///   `obs_slog` feature) and prints progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizerOptions {
    pub sd_tolerance: f64,
    pub max_iter: u64,
    pub verbose: bool,
}

impl MinimizerOptions {
    /// Construct validated minimizer options.
    ///
    /// # Errors
    /// - [`FitError::InvalidSdTolerance`] for a non-finite or non-positive
    ///   tolerance.
    /// - [`FitError::InvalidMaxIter`] when `max_iter == 0`.
    pub fn new(sd_tolerance: f64, max_iter: u64, verbose: bool) -> FitResult<Self> {
        if !sd_tolerance.is_finite() {
            return Err(FitError::InvalidSdTolerance {
                tol: sd_tolerance,
                reason: "Tolerance must be finite.",
            });
        }
        if sd_tolerance <= 0.0 {
            return Err(FitError::InvalidSdTolerance {
                tol: sd_tolerance,
                reason: "Tolerance must be positive.",
            });
        }
        if max_iter == 0 {
            return Err(FitError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { sd_tolerance, max_iter, verbose })
    }
}

impl Default for MinimizerOptions {
    fn default() -> Self {
        Self { sd_tolerance: DEFAULT_SD_TOLERANCE, max_iter: DEFAULT_MAX_ITER, verbose: false }
    }
}

/// Normalized result of one local search.
///
/// - `theta`: best parameter vector found.
/// - `deviance`: objective value at `theta` (sentinel-valued if the best
///   vertex was infeasible; still finite).
/// - `converged`: `true` when the solver terminated on its own criterion
///   rather than the iteration cap. A non-converged result is still a
///   valid candidate for the multi-start reduction.
/// - `iterations`: number of solver iterations performed.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFit {
    pub theta: Theta,
    pub deviance: f64,
    pub converged: bool,
    pub iterations: u64,
}

/// Build the initial simplex around a starting point: the point itself
/// plus one vertex per coordinate, perturbed by 5 % (or a small absolute
/// step near zero).
fn build_simplex(start: &Theta) -> FitResult<Vec<Theta>> {
    if start.is_empty() {
        return Err(FitError::EmptyStartPoint);
    }
    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(start.clone());
    for i in 0..start.len() {
        let mut vertex = start.clone();
        let delta =
            if vertex[i].abs() > 1e-8 { vertex[i] * SIMPLEX_STEP } else { SIMPLEX_ZERO_STEP };
        vertex[i] += delta;
        simplex.push(vertex);
    }
    Ok(simplex)
}

/// Run one Nelder–Mead minimization of `model`'s deviance from `start`.
///
/// # Behavior
/// - Builds the initial simplex via [`build_simplex`].
/// - Wraps `(model, data)` in a [`DevianceProblem`]; infeasible probes
///   surface as the sentinel objective, never as solver errors.
/// - Runs the solver with the configured tolerance and iteration cap,
///   then validates and normalizes the final state into a [`LocalFit`].
///
/// # Errors
/// - Propagates solver construction and runtime errors via the crate's
///   `From<argmin::core::Error>` conversion.
/// - [`FitError::MissingBestParameter`] / [`FitError::NonFiniteBestValue`]
///   if the final state fails validation.
pub fn minimize<M: DevianceModel>(
    model: &M, data: &Dataset, start: Theta, opts: &MinimizerOptions,
) -> FitResult<LocalFit> {
    let simplex = build_simplex(&start)?;
    let solver: NelderMead<Theta, f64> =
        NelderMead::new(simplex).with_sd_tolerance(opts.sd_tolerance)?;
    let problem = DevianceProblem::new(model, data);

    let mut executor = Executor::new(problem, solver);
    executor = executor.configure(|state| state.max_iters(opts.max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        executor = executor.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let mut result = executor.run()?.state().clone();
    let iterations = result.get_iter();
    let termination = result.get_termination_status().clone();
    let theta = result.take_best_param().ok_or(FitError::MissingBestParameter)?;
    let deviance = result.get_best_cost();
    if !deviance.is_finite() {
        return Err(FitError::NonFiniteBestValue { value: deviance });
    }

    let converged = matches!(
        termination,
        TerminationStatus::Terminated(
            TerminationReason::SolverConverged | TerminationReason::TargetCostReached
        )
    );

    Ok(LocalFit { theta, deviance, converged, iterations })
}
