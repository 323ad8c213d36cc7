//! optimization — derivative-free local search plus the multi-start driver.
//!
//! Purpose
//! -------
//! Turn a non-convex, possibly discontinuous deviance surface into a
//! reliable global-search procedure. The local layer ([`minimizer`])
//! bridges a [`crate::models::DevianceModel`] into argmin's Nelder–Mead
//! solver through a sentinel-mapped cost function; the driver layer
//! ([`multistart`]) runs many independent local searches from randomized
//! starts and keeps the global-best result.
//!
//! Key behaviors
//! -------------
//! - [`minimizer::DevianceProblem`] exposes deviance as an argmin
//!   [`argmin::core::CostFunction`]; infeasible evaluations surface as the
//!   numeric sentinel, so the hot path never raises and the solver never
//!   sees NaN or infinity.
//! - [`minimize`] builds the initial simplex, runs the solver under
//!   validated [`MinimizerOptions`], and normalizes the final state into a
//!   [`LocalFit`].
//! - [`fit`] dispatches restarts (sequentially or on the rayon pool) with
//!   private per-trial RNG streams and reduces them with an arg-min over
//!   `(deviance, trial_index)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective handed to argmin is always finite.
//! - A fixed seed fully determines the outcome, independent of the degree
//!   of parallelism.
//! - Configuration types are validated on construction and treated as
//!   internally consistent by the solver layer.

pub mod errors;
pub mod minimizer;
pub mod multistart;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{FitError, FitResult};
pub use self::minimizer::{
    minimize, DevianceProblem, LocalFit, MinimizerOptions, DEFAULT_MAX_ITER, DEFAULT_SD_TOLERANCE,
};
pub use self::multistart::{fit, FitOutcome, MultiStartOptions, DEFAULT_RESTARTS};
