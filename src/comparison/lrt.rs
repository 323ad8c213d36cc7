//! Likelihood-ratio test for nested model pairs.
//!
//! Purpose
//! -------
//! Turn a deviance difference between a full model and a restriction of
//! it into an exact asymptotic decision. Under the null hypothesis that
//! the restricted model is adequate, the deviance difference is
//! chi-square distributed with degrees of freedom equal to the number of
//! parameters removed by the restriction.
//!
//! Key behaviors
//! -------------
//! - Nesting is declared explicitly through [`Constraint`] values rather
//!   than inferred from parameter counts. The declaration is checked
//!   against the full model's parameter names, and the degrees of
//!   freedom it implies must account exactly for the count difference.
//!   A count difference alone does not make two models nested.
//! - The deviance difference is taken as `restricted − full` and handed
//!   to the chi-square CDF without clamping. Real fits can land slightly
//!   below zero through solver tolerance; the CDF is zero there, so the
//!   p-value degrades gracefully to 1.
//!
//! Conventions
//! -----------
//! - `significant == true` means the restriction is rejected at level
//!   alpha, i.e. the full model fits significantly better.
//! - The rejection rule is `delta >= critical_value`, equivalent to
//!   `p_value <= alpha` up to CDF round-off.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::comparison::errors::{CompareError, CompareResult};
use crate::optimization::FitOutcome;

/// One restriction applied to the full model's parameter space.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Force a set of the full model's parameters to share one value.
    /// Equating m parameters removes m − 1 degrees of freedom.
    Equate { parameters: Vec<String> },
    /// Pin one of the full model's parameters to a known constant.
    /// Removes one degree of freedom.
    Fix { parameter: String, value: f64 },
}

impl Constraint {
    /// Degrees of freedom this constraint removes from the full model.
    fn removed_df(&self) -> usize {
        match self {
            Constraint::Equate { parameters } => parameters.len().saturating_sub(1),
            Constraint::Fix { .. } => 1,
        }
    }

    fn parameter_names(&self) -> Vec<&str> {
        match self {
            Constraint::Equate { parameters } => {
                parameters.iter().map(String::as_str).collect()
            }
            Constraint::Fix { parameter, .. } => vec![parameter.as_str()],
        }
    }
}

/// Validated declaration of how the restricted model nests inside the
/// full model.
#[derive(Debug, Clone, PartialEq)]
pub struct Nesting {
    constraints: Vec<Constraint>,
}

impl Nesting {
    /// Construct a nesting declaration from its constraints.
    ///
    /// # Errors
    /// - [`CompareError::EmptyNesting`] for an empty constraint list.
    /// - [`CompareError::EmptyEquateSet`] when an equate constraint names
    ///   fewer than two parameters.
    pub fn new(constraints: Vec<Constraint>) -> CompareResult<Self> {
        if constraints.is_empty() {
            return Err(CompareError::EmptyNesting);
        }
        for constraint in &constraints {
            if let Constraint::Equate { parameters } = constraint {
                if parameters.len() < 2 {
                    return Err(CompareError::EmptyEquateSet { len: parameters.len() });
                }
            }
        }
        Ok(Self { constraints })
    }

    /// The constraints in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Total degrees of freedom the declaration removes.
    pub fn implied_df(&self) -> usize {
        self.constraints.iter().map(Constraint::removed_df).sum()
    }

    /// Check the declaration against a full model's parameter names:
    /// every constrained name must exist and appear in at most one
    /// constraint.
    fn validate_against(&self, full_names: &[&'static str]) -> CompareResult<()> {
        let mut seen: Vec<&str> = Vec::new();
        for constraint in &self.constraints {
            for name in constraint.parameter_names() {
                if !full_names.iter().any(|&n| n == name) {
                    return Err(CompareError::UnknownParameter { name: name.to_owned() });
                }
                if seen.contains(&name) {
                    return Err(CompareError::DuplicateConstraint { name: name.to_owned() });
                }
                seen.push(name);
            }
        }
        Ok(())
    }
}

/// Result of one likelihood-ratio test.
///
/// Fields
/// ------
/// - `delta_deviance`: `restricted.deviance − full.deviance`, unclamped.
/// - `df`: degrees of freedom of the reference chi-square distribution.
/// - `p_value`: upper-tail probability of `delta_deviance`.
/// - `critical_value`: chi-square quantile at `1 − alpha`.
/// - `significant`: whether the restriction is rejected at level alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LrtOutcome {
    pub delta_deviance: f64,
    pub df: usize,
    pub p_value: f64,
    pub critical_value: f64,
    pub significant: bool,
}

/// Test whether `restricted` fits significantly worse than `full`.
///
/// # Behavior
/// - Validates alpha, both deviances, the parameter-count reduction, and
///   the nesting declaration (names exist in `full`, no name constrained
///   twice, implied degrees of freedom equal the count difference).
/// - Computes `delta = restricted.deviance − full.deviance` and compares
///   it to the chi-square distribution with the validated degrees of
///   freedom.
///
/// # Errors
/// Any of the validation failures documented on [`CompareError`].
pub fn likelihood_ratio_test(
    full: &FitOutcome, restricted: &FitOutcome, nesting: &Nesting, alpha: f64,
) -> CompareResult<LrtOutcome> {
    if !alpha.is_finite() {
        return Err(CompareError::InvalidAlpha { alpha, reason: "must be finite" });
    }
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(CompareError::InvalidAlpha {
            alpha,
            reason: "must lie strictly between 0 and 1",
        });
    }
    for deviance in [full.deviance, restricted.deviance] {
        if !deviance.is_finite() {
            return Err(CompareError::NonFiniteDeviance { value: deviance });
        }
    }

    let k_full = full.parameters.len();
    let k_restricted = restricted.parameters.len();
    if k_full <= k_restricted {
        return Err(CompareError::NoParameterReduction { k_full, k_restricted });
    }

    nesting.validate_against(full.parameters.names())?;
    let df = nesting.implied_df();
    let expected = k_full - k_restricted;
    if df != expected {
        return Err(CompareError::DegreesOfFreedomMismatch { implied: df, expected });
    }

    let delta_deviance = restricted.deviance - full.deviance;

    // df >= 1 here: the declaration is non-empty and its implied df
    // equals a strictly positive count difference.
    let chi2 = ChiSquared::new(df as f64).expect("df >= 1 after nesting validation");
    let p_value = 1.0 - chi2.cdf(delta_deviance);
    let critical_value = chi2.inverse_cdf(1.0 - alpha);
    let significant = delta_deviance >= critical_value;

    Ok(LrtOutcome { delta_deviance, df, p_value, critical_value, significant })
}
