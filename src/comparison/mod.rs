//! comparison — the model-selection engine.
//!
//! Purpose
//! -------
//! Decide between fitted models. Two regimes are supported:
//! - Nested pairs, where the restricted model's parameter space is a
//!   declared restriction of the full model's, are tested with the exact
//!   asymptotic chi-square likelihood-ratio test ([`lrt`]).
//! - Non-nested pairs are compared through the BIC approximation to the
//!   Bayes factor ([`bic`]), which penalizes parameter count but yields
//!   no p-value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fits handed to the engine carry finite deviances; the engine
//!   re-checks and refuses non-finite input rather than propagating it
//!   into a statistic.
//! - Nesting is never inferred from parameter counts alone: callers
//!   declare the restriction explicitly and the declaration is validated
//!   against the full model's parameter names.

pub mod bic;
pub mod errors;
pub mod lrt;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bic::{bayes_factor_bic, bic, BayesComparison, Preference};
pub use self::errors::{CompareError, CompareResult};
pub use self::lrt::{likelihood_ratio_test, Constraint, LrtOutcome, Nesting};
