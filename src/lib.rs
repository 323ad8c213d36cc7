//! seriesfit — maximum-likelihood model fitting and comparison for
//! univariate daily count series.
//!
//! Purpose
//! -------
//! Fit competing probabilistic models to an ordered sequence of daily
//! observations by deviance minimization, approximate global optima with a
//! multi-start local-search driver, and decide which model the data support
//! using BIC/Bayes-factor statistics (non-nested pairs) or chi-square
//! likelihood-ratio tests (nested pairs).
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules ([`data`], [`models`], [`optimization`],
//!   [`comparison`]) as the public crate surface.
//! - Define a single model contract, [`models::DevianceModel`], that every
//!   candidate theory implements: a deviance function over a parameter
//!   vector and a read-only [`data::Dataset`], plus a randomized
//!   initial-guess sampler.
//! - Drive the external derivative-free minimizer (argmin's Nelder–Mead)
//!   through [`optimization::fit`], which runs independent restarts and
//!   keeps the global-best result.
//! - Convert raw fit quality into comparable evidence via
//!   [`comparison::bayes_factor_bic`] and
//!   [`comparison::likelihood_ratio_test`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Deviance evaluation never propagates NaN or infinity to the optimizer:
//!   infeasible parameter vectors are represented internally as
//!   [`models::Deviance::Infeasible`] and converted to the numeric sentinel
//!   [`models::INFEASIBLE_DEVIANCE`] only at the minimizer boundary.
//! - Datasets are validated once at construction and never mutated by the
//!   core; they may be shared freely across concurrent restart trials.
//! - Multi-start results are deterministic for a fixed seed and invariant
//!   to the degree of parallelism, because each trial owns a private RNG
//!   stream and the final reduction is an arg-min over `(deviance, trial)`.
//!
//! Conventions
//! -----------
//! - Parameter vectors live in an unconstrained optimizer space as
//!   [`models::Theta`] (`Array1<f64>`); each model documents its own theta
//!   layout and exposes ordered parameter names.
//! - Deviance is `−2 · log-likelihood`; lower is better, and it is the
//!   minimization objective everywhere in this crate.
//! - Errors bubble up as per-subtree result aliases (`DataResult`,
//!   `FitResult`, `CompareResult`); the deviance hot path itself never
//!   returns an error.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`data::Dataset`] from already-parsed observations (file
//!   ingestion is a caller concern), pick candidate models from
//!   [`models`], fit each with [`optimization::fit`], and hand the
//!   resulting [`optimization::FitOutcome`]s to the comparison engine.
//! - Reporting and visualization layers consume [`optimization::FitOutcome`]
//!   and the comparison outcome types; this crate performs no I/O.

pub mod comparison;
pub mod data;
pub mod models;
pub mod optimization;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use seriesfit::prelude::*;
//
// to import the main fitting and comparison surface in a single line.

pub mod prelude {
    pub use crate::comparison::{
        bayes_factor_bic, bic, likelihood_ratio_test, BayesComparison, Constraint, LrtOutcome,
        Nesting, Preference,
    };
    pub use crate::data::{Dataset, Observation};
    pub use crate::models::{
        Deviance, DevianceModel, FixedPeriodic, FreePeriodic, ParameterVector, SingleGaussian,
        Theta, TwoGroupSeparate, TwoGroupShared, INFEASIBLE_DEVIANCE,
    };
    pub use crate::optimization::{fit, FitOutcome, MinimizerOptions, MultiStartOptions};
}
