//! Validated observation containers for daily count series.
//!
//! Purpose
//! -------
//! Provide small, validated containers for the univariate observation
//! sequence consumed by every candidate model. This module centralizes
//! input validation for raw daily records and standardizes the
//! weekday/weekend partition used by the two-group models.
//!
//! Key behaviors
//! -------------
//! - [`Observation`] records one day: calendar fields, a 1-based day of
//!   week (`1 = Sunday`, `7 = Saturday`), and a non-negative count.
//! - [`Dataset`] enforces basic invariants at construction (non-empty,
//!   in-range calendar fields) and is strictly read-only afterwards.
//! - Partition accessors ([`Dataset::weekday_counts`],
//!   [`Dataset::weekend_counts`]) split the series per the fixed rule
//!   weekday = day-of-week ∈ {2..=6}, weekend = day-of-week ∈ {1, 7}.
//!
//! Invariants & assumptions
//! ------------------------
//! - `day_of_week` is always in `1..=7`, `month` in `1..=12`,
//!   `day_of_month` in `1..=31` after construction.
//! - Row order is significant: periodic models use row position directly
//!   as their time index. The dataset never reorders observations.
//! - The container holds at least one observation.
//!
//! Conventions
//! -----------
//! - Counts are stored as integers but exposed to the likelihood layer as
//!   `f64` arrays, matching the crate's `ndarray`-based numeric types.
//! - This module performs no parsing; callers hand it already-parsed rows.
//!
//! Downstream usage
//! ----------------
//! - Construct [`Dataset`] once at the boundary where parsed rows enter
//!   the fitting stack; all models and the multi-start driver borrow it
//!   immutably, so it can be shared across worker threads without locking.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `Dataset::new` (happy
//!   path, empty input, each out-of-range field) and the weekday/weekend
//!   partition on a known week.

use ndarray::Array1;

/// Crate-wide result alias for dataset construction.
pub type DataResult<T> = Result<T, DataError>;

/// Error conditions raised while validating raw observation rows.
///
/// Each variant carries the offending row index and value so callers can
/// point at the exact input record that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The observation sequence is empty.
    EmptyDataset,
    /// `day_of_week` outside `1..=7` (1 = Sunday).
    DayOfWeekOutOfRange { row: usize, value: u8 },
    /// `month` outside `1..=12`.
    MonthOutOfRange { row: usize, value: u32 },
    /// `day_of_month` outside `1..=31`.
    DayOfMonthOutOfRange { row: usize, value: u32 },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::EmptyDataset => {
                write!(f, "Dataset must contain at least one observation")
            }
            DataError::DayOfWeekOutOfRange { row, value } => {
                write!(f, "Invalid day of week {value} at row {row}: must be in 1..=7")
            }
            DataError::MonthOutOfRange { row, value } => {
                write!(f, "Invalid month {value} at row {row}: must be in 1..=12")
            }
            DataError::DayOfMonthOutOfRange { row, value } => {
                write!(f, "Invalid day of month {value} at row {row}: must be in 1..=31")
            }
        }
    }
}

/// One daily record: calendar fields plus a non-negative event count.
///
/// `day_of_week` follows the source data convention `1 = Sunday` through
/// `7 = Saturday`. The count is unsigned, so non-negativity is enforced by
/// the type system rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub year: i32,
    pub month: u32,
    pub day_of_month: u32,
    /// 1-based day of week, `1 = Sunday` .. `7 = Saturday`.
    pub day_of_week: u8,
    /// Observed event count for the day.
    pub count: u64,
}

impl Observation {
    /// `true` when the observation falls on a Saturday or Sunday.
    ///
    /// The partition rule is fixed: weekday = day-of-week ∈ {2..=6},
    /// weekend = day-of-week ∈ {1, 7}.
    pub fn is_weekend(&self) -> bool {
        self.day_of_week == 1 || self.day_of_week == 7
    }
}

/// `Dataset` — validated, ordered, read-only observation sequence.
///
/// Purpose
/// -------
/// Represent the single observation series every model is evaluated
/// against. Validation happens once in [`Dataset::new`]; downstream code
/// (likelihoods, the multi-start driver, the comparison engine) may assume
/// clean, in-range records and borrow the dataset concurrently.
///
/// Invariants
/// ----------
/// - `observations.len() > 0`.
/// - Every row satisfies the calendar-field ranges documented on
///   [`DataError`].
/// - Row order is preserved exactly as supplied; periodic models treat row
///   position as their time index, so callers must supply contiguous daily
///   records for those models to be meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Construct a validated [`Dataset`] from already-parsed rows.
    ///
    /// Validation is a single pass, stopping at the first invalid row.
    ///
    /// # Errors
    /// - [`DataError::EmptyDataset`] when `observations` is empty.
    /// - [`DataError::DayOfWeekOutOfRange`],
    ///   [`DataError::MonthOutOfRange`],
    ///   [`DataError::DayOfMonthOutOfRange`] with the first offending row.
    pub fn new(observations: Vec<Observation>) -> DataResult<Self> {
        if observations.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        for (row, obs) in observations.iter().enumerate() {
            if !(1..=7).contains(&obs.day_of_week) {
                return Err(DataError::DayOfWeekOutOfRange { row, value: obs.day_of_week });
            }
            if !(1..=12).contains(&obs.month) {
                return Err(DataError::MonthOutOfRange { row, value: obs.month });
            }
            if !(1..=31).contains(&obs.day_of_month) {
                return Err(DataError::DayOfMonthOutOfRange { row, value: obs.day_of_month });
            }
        }
        Ok(Dataset { observations })
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false` after construction; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Borrow the full ordered observation slice.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// All counts as an owned `f64` array, in row order.
    pub fn counts(&self) -> Array1<f64> {
        Array1::from_iter(self.observations.iter().map(|o| o.count as f64))
    }

    /// Counts of weekday rows (day-of-week 2..=6), preserving row order.
    pub fn weekday_counts(&self) -> Vec<f64> {
        self.observations.iter().filter(|o| !o.is_weekend()).map(|o| o.count as f64).collect()
    }

    /// Counts of weekend rows (day-of-week 1 or 7), preserving row order.
    pub fn weekend_counts(&self) -> Vec<f64> {
        self.observations.iter().filter(|o| o.is_weekend()).map(|o| o.count as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `Dataset::new`.
    // - Enforcement of invariants:
    //   * non-empty series,
    //   * in-range day-of-week, month, and day-of-month.
    // - The weekday/weekend partition on a full calendar week.
    //
    // They intentionally DO NOT cover:
    // - Likelihood evaluation over datasets; that lives with the models.
    // -------------------------------------------------------------------------

    // Build one observation with fixed calendar fields and the given
    // day-of-week and count, for compact test setup.
    fn obs(day_of_week: u8, count: u64) -> Observation {
        Observation { year: 2024, month: 3, day_of_month: 10, day_of_week, count }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `Dataset::new` accepts a valid sequence and preserves
    // row order and counts exactly.
    //
    // Given
    // -----
    // - Three in-range observations with distinct counts.
    //
    // Expect
    // ------
    // - Construction succeeds, `len` is 3 and `counts()` matches input
    //   order.
    fn dataset_new_returns_ok_for_valid_rows() {
        let rows = vec![obs(1, 5), obs(2, 7), obs(3, 9)];

        let dataset = Dataset::new(rows).expect("valid rows should construct");

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.counts().to_vec(), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `Dataset::new` rejects an empty sequence.
    //
    // Given
    // -----
    // - An empty observation vector.
    //
    // Expect
    // ------
    // - `Err(DataError::EmptyDataset)`.
    fn dataset_new_returns_error_for_empty_input() {
        let result = Dataset::new(Vec::new());

        assert_eq!(result.unwrap_err(), DataError::EmptyDataset);
    }

    #[test]
    // Purpose
    // -------
    // Ensure each out-of-range calendar field is rejected with the
    // offending row index and value.
    //
    // Given
    // -----
    // - Rows with day-of-week 0, month 13, and day-of-month 32
    //   respectively, each preceded by one valid row.
    //
    // Expect
    // ------
    // - The matching `DataError` variant pointing at row 1 in every case.
    fn dataset_new_reports_first_out_of_range_field() {
        let bad_dow = vec![obs(2, 1), Observation { day_of_week: 0, ..obs(2, 1) }];
        assert_eq!(
            Dataset::new(bad_dow).unwrap_err(),
            DataError::DayOfWeekOutOfRange { row: 1, value: 0 }
        );

        let bad_month = vec![obs(2, 1), Observation { month: 13, ..obs(2, 1) }];
        assert_eq!(
            Dataset::new(bad_month).unwrap_err(),
            DataError::MonthOutOfRange { row: 1, value: 13 }
        );

        let bad_dom = vec![obs(2, 1), Observation { day_of_month: 32, ..obs(2, 1) }];
        assert_eq!(
            Dataset::new(bad_dom).unwrap_err(),
            DataError::DayOfMonthOutOfRange { row: 1, value: 32 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the weekday/weekend partition rule over a full week.
    //
    // Given
    // -----
    // - Seven observations, day-of-week 1..=7, with count equal to the
    //   day-of-week so group membership is visible in the outputs.
    //
    // Expect
    // ------
    // - Weekend counts are days 1 and 7; weekday counts are days 2..=6,
    //   both in row order.
    fn dataset_partitions_weekdays_and_weekends() {
        let rows: Vec<Observation> = (1..=7).map(|d| obs(d, d as u64)).collect();

        let dataset = Dataset::new(rows).expect("full week should construct");

        assert_eq!(dataset.weekend_counts(), vec![1.0, 7.0]);
        assert_eq!(dataset.weekday_counts(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
