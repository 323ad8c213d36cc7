//! Integration tests for the fitting and model-selection pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: from a validated dataset, through
//!   multi-start deviance minimization, to BIC/Bayes-factor and
//!   likelihood-ratio decisions between competing models.
//! - Exercise realistic data regimes (noisy synthetic counts, strong and
//!   absent weekend effects) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `data`:
//!   - `Dataset` construction from synthetic weekly observation grids.
//! - `models`:
//!   - `SingleGaussian`, `TwoGroupShared`, and `TwoGroupSeparate` under
//!     real fits.
//! - `optimization`:
//!   - `fit` with parallel multi-start, fixed seeds, and repeat-run
//!     determinism.
//! - `comparison`:
//!   - `likelihood_ratio_test` on nested pairs in both significant and
//!     non-significant regimes.
//!   - `bayes_factor_bic` preference and symmetry on fitted models.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (parameter
//!   checks, simplex construction, nesting bookkeeping) — these are
//!   covered by unit tests.
//! - The periodic models' waveform recovery — their deviance algebra and
//!   nesting identity are covered by unit tests, and their multi-modal
//!   fits are too seed-sensitive for exact assertions here.
use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seriesfit::prelude::*;
use statrs::distribution::Normal;

/// Purpose
/// -------
/// Build a validated `Dataset` from a flat count sequence, assigning
/// calendar fields on a repeating weekly grid.
///
/// Parameters
/// ----------
/// - `counts`: One count per day, in order. Day-of-week cycles 1..=7
///   starting from Sunday, so indices 0 and 6 of each week are weekend
///   rows.
///
/// Returns
/// -------
/// - A `Dataset` whose month and day-of-month fields are synthetic but
///   valid; only `day_of_week` and `count` carry signal for these tests.
fn dataset_from_counts(counts: &[u64]) -> Dataset {
    let rows = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Observation {
            year: 2024,
            month: 1 + (i / 28) as u32 % 12,
            day_of_month: 1 + (i % 28) as u32,
            day_of_week: 1 + (i % 7) as u8,
            count,
        })
        .collect();
    Dataset::new(rows).expect("synthetic weekly grid is valid")
}

/// Purpose
/// -------
/// Build a weekly dataset with separate repeating count patterns for
/// weekday and weekend rows.
///
/// Parameters
/// ----------
/// - `weeks`: Number of whole weeks to generate.
/// - `weekday`: Cycle of counts used for day-of-week 2..=6.
/// - `weekend`: Cycle of counts used for day-of-week 1 and 7.
///
/// Returns
/// -------
/// - A `Dataset` of `7 * weeks` rows where each group cycles through its
///   own pattern, so group means and variances are known exactly.
fn weekly_dataset(weeks: usize, weekday: &[u64], weekend: &[u64]) -> Dataset {
    let mut wd = 0;
    let mut we = 0;
    let counts: Vec<u64> = (0..weeks * 7)
        .map(|i| {
            let dow = 1 + (i % 7);
            if (2..=6).contains(&dow) {
                let c = weekday[wd % weekday.len()];
                wd += 1;
                c
            } else {
                let c = weekend[we % weekend.len()];
                we += 1;
                c
            }
        })
        .collect();
    dataset_from_counts(&counts)
}

/// Purpose
/// -------
/// Provide a stable, documented multi-start configuration for the
/// integration fits.
///
/// Configuration
/// -------------
/// - Default minimizer settings (sd tolerance 1e-8, 1000 iterations).
/// - Parallel dispatch on the rayon pool; results are seed-determined
///   and scheduling-invariant, so parallelism is safe to leave on.
fn fit_opts(restarts: usize, seed: u64) -> MultiStartOptions {
    MultiStartOptions::new(restarts, seed, MinimizerOptions::default(), true)
        .expect("positive restart count")
}

#[test]
// Purpose
// -------
// Recover a known level from low-noise data and confirm repeat runs
// with the same seed produce identical outcomes.
//
// Given
// -----
// - 63 days cycling {6, 8, 10} (mean 8, variance 8/3), 20 restarts.
//
// Expect
// ------
// - mu within 0.2 of 8, sigma2 within 1.0 of 8/3, and two runs with
//   the same options compare equal.
fn single_gaussian_recovers_level_and_is_deterministic() {
    let counts: Vec<u64> = (0..63).map(|i| [6, 8, 10][i % 3]).collect();
    let data = dataset_from_counts(&counts);
    let opts = fit_opts(20, 11);

    let outcome = fit(&SingleGaussian, &data, &opts).expect("fit should complete");
    let repeat = fit(&SingleGaussian, &data, &opts).expect("fit should complete");

    let mu = outcome.parameters.get("mu").expect("mu is a model parameter");
    let sigma2 = outcome.parameters.get("sigma2").expect("sigma2 is a model parameter");
    assert!((mu - 8.0).abs() < 0.2, "mu = {mu}");
    assert!((sigma2 - 8.0 / 3.0).abs() < 1.0, "sigma2 = {sigma2}");
    assert_eq!(outcome, repeat);
}

#[test]
// Purpose
// -------
// Fit noisy synthetic counts and check the estimates agree with the
// realized sample moments, which are the exact maximum-likelihood
// values for this model.
//
// Given
// -----
// - 120 counts drawn from Normal(20, 3), rounded and clamped at zero,
//   with a fixed sampling seed; 30 restarts.
//
// Expect
// ------
// - mu within 0.3 of the sample mean and sigma2 within 1.0 of the
//   (biased) sample variance.
fn single_gaussian_matches_sample_moments_on_noisy_counts() {
    let normal = Normal::new(20.0, 3.0).expect("valid normal parameters");
    let mut rng = SmallRng::seed_from_u64(2024);
    let counts: Vec<u64> =
        (0..120).map(|_| normal.sample(&mut rng).round().max(0.0) as u64).collect();
    let data = dataset_from_counts(&counts);

    let n = counts.len() as f64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    let variance = counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n;

    let outcome = fit(&SingleGaussian, &data, &fit_opts(30, 5)).expect("fit should complete");

    let mu = outcome.parameters.get("mu").expect("mu is a model parameter");
    let sigma2 = outcome.parameters.get("sigma2").expect("sigma2 is a model parameter");
    assert!((mu - mean).abs() < 0.3, "mu = {mu}, sample mean = {mean}");
    assert!((sigma2 - variance).abs() < 1.0, "sigma2 = {sigma2}, sample variance = {variance}");
}

#[test]
// Purpose
// -------
// A strong weekend effect must be detected: splitting the mean by
// weekday/weekend improves the deviance far beyond the one degree of
// freedom it spends.
//
// Given
// -----
// - 10 weeks with weekday counts cycling {9, 10, 11} and weekend counts
//   cycling {1, 2, 3}; full = TwoGroupShared, restricted =
//   SingleGaussian, means equated.
//
// Expect
// ------
// - delta well past the df = 1 critical value, significant, p ~ 0, and
//   the restricted deviance no better than the full one (up to solver
//   tolerance).
fn strong_weekend_effect_is_significant() {
    let data = weekly_dataset(10, &[9, 10, 11], &[1, 2, 3]);

    let full = fit(&TwoGroupShared, &data, &fit_opts(30, 17)).expect("full fit");
    let restricted = fit(&SingleGaussian, &data, &fit_opts(30, 17)).expect("restricted fit");

    let nesting = Nesting::new(vec![Constraint::Equate {
        parameters: vec!["mu_weekday".to_owned(), "mu_weekend".to_owned()],
    }])
    .expect("well-formed declaration");
    let lrt =
        likelihood_ratio_test(&full, &restricted, &nesting, 0.05).expect("valid nested pair");

    assert!(lrt.delta_deviance > -1e-3, "delta = {}", lrt.delta_deviance);
    assert_eq!(lrt.df, 1);
    assert!(lrt.significant, "delta = {}, critical = {}", lrt.delta_deviance, lrt.critical_value);
    assert!(lrt.p_value < 1e-6, "p = {}", lrt.p_value);
}

#[test]
// Purpose
// -------
// When the two groups genuinely share a variance, the separate-variance
// model must not test as a significant improvement over the shared one.
//
// Given
// -----
// - 12 weeks with weekday counts cycling {8, 10, 12} and weekend counts
//   cycling {0, 2, 4}: different means, identical group variances.
//
// Expect
// ------
// - A small deviance difference (possibly a hair negative from solver
//   tolerance) and significant = false at alpha 0.05.
fn equal_group_variances_are_not_significant() {
    let data = weekly_dataset(12, &[8, 10, 12], &[0, 2, 4]);

    let full = fit(&TwoGroupSeparate, &data, &fit_opts(30, 23)).expect("full fit");
    let restricted = fit(&TwoGroupShared, &data, &fit_opts(30, 23)).expect("restricted fit");

    let nesting = Nesting::new(vec![Constraint::Equate {
        parameters: vec!["sigma2_weekday".to_owned(), "sigma2_weekend".to_owned()],
    }])
    .expect("well-formed declaration");
    let lrt =
        likelihood_ratio_test(&full, &restricted, &nesting, 0.05).expect("valid nested pair");

    assert!(lrt.delta_deviance > -1e-3, "delta = {}", lrt.delta_deviance);
    assert!(lrt.delta_deviance < 1.0, "delta = {}", lrt.delta_deviance);
    assert!(!lrt.significant, "delta = {}, critical = {}", lrt.delta_deviance, lrt.critical_value);
}

#[test]
// Purpose
// -------
// On strong weekend-effect data, the BIC comparison must prefer the
// two-group model despite its extra parameter, and the Bayes factor
// must be symmetric under argument swap.
//
// Given
// -----
// - The same 10-week weekend-effect dataset; SingleGaussian as model A
//   and TwoGroupShared as model B.
//
// Expect
// ------
// - BF(A, B) > 1, preferred = ModelB, BF(A, B) · BF(B, A) = 1.
fn bic_comparison_prefers_the_weekend_model() {
    let data = weekly_dataset(10, &[9, 10, 11], &[1, 2, 3]);
    let n_obs = data.len();

    let single = fit(&SingleGaussian, &data, &fit_opts(30, 31)).expect("single fit");
    let grouped = fit(&TwoGroupShared, &data, &fit_opts(30, 31)).expect("grouped fit");

    let ab = bayes_factor_bic(&single, &grouped, n_obs).expect("valid comparison");
    let ba = bayes_factor_bic(&grouped, &single, n_obs).expect("valid comparison");

    assert!(ab.bayes_factor > 1.0, "BF = {}", ab.bayes_factor);
    assert_eq!(ab.preferred, Preference::ModelB);
    assert!(
        (ab.bayes_factor * ba.bayes_factor - 1.0).abs() < 1e-9,
        "BF product = {}",
        ab.bayes_factor * ba.bayes_factor
    );
}
