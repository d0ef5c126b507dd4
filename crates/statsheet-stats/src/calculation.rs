//! End-to-end calculation of statistics from user input.
//!
//! This is the pipeline a presentation layer drives on every request:
//!
//! 1. Parse the input text into numbers
//! 2. Reject input without numbers, or with fewer than [`MIN_VALUES`] numbers
//! 3. Compute the summary statistics
//! 4. Compute the histogram, reusing the sorted values of the summary
//!
//! # Examples
//!
//! ```
//! use statsheet_stats::calculation::{self, DataError};
//!
//! let calculation = calculation::calculate("12, 15, 18, 20, 22").unwrap();
//! assert_eq!(calculation.summary.stats.mean, 17.4);
//! assert_eq!(calculation.histogram.total_count(), 5);
//!
//! assert_eq!(calculation::calculate("n/a").unwrap_err(), DataError::EmptyInput);
//! assert_eq!(
//!     calculation::calculate("42").unwrap_err(),
//!     DataError::InsufficientData { count: 1 }
//! );
//! ```

use serde::Serialize;

use crate::{histogram::Histogram, parse, summary::StatisticsSummary};

/// Minimum number of values required for a calculation.
pub const MIN_VALUES: usize = 2;

/// Reasons a calculation request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DataError {
    /// The input did not contain any number.
    #[display("Please enter valid numeric data. Make sure the data consists of numbers.")]
    EmptyInput,
    /// The input contained fewer than [`MIN_VALUES`] numbers.
    #[display("At least 2 values are required for statistical calculation.")]
    InsufficientData { count: usize },
}

/// Result of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// Summary statistics of the parsed values.
    pub summary: StatisticsSummary,
    /// Distribution of the parsed values.
    pub histogram: Histogram,
}

/// Parses `input` and computes its statistics.
///
/// # Errors
///
/// Returns [`DataError::EmptyInput`] if `input` contains no number, and
/// [`DataError::InsufficientData`] if it contains fewer than [`MIN_VALUES`].
pub fn calculate(input: &str) -> Result<Calculation, DataError> {
    let values = parse::parse_numbers(input);
    tracing::debug!(count = values.len(), "parsed input");
    calculate_values(&values)
}

/// Computes the statistics of already parsed values.
///
/// # Errors
///
/// Same as [`calculate`].
pub fn calculate_values(values: &[f64]) -> Result<Calculation, DataError> {
    check_values(values)?;
    let summary = StatisticsSummary::compute(values).ok_or(DataError::EmptyInput)?;
    let histogram = summary.histogram();
    tracing::debug!(
        count = summary.count(),
        bins = histogram.bins.len(),
        "computed statistics"
    );
    Ok(Calculation { summary, histogram })
}

/// Checks that `values` are enough for a calculation.
///
/// # Errors
///
/// Same as [`calculate`].
pub fn check_values(values: &[f64]) -> Result<(), DataError> {
    match values.len() {
        0 => Err(DataError::EmptyInput),
        count if count < MIN_VALUES => Err(DataError::InsufficientData { count }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(calculate("").unwrap_err(), DataError::EmptyInput);
        assert_eq!(calculate("   ").unwrap_err(), DataError::EmptyInput);
        assert_eq!(calculate("abc, def").unwrap_err(), DataError::EmptyInput);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            calculate("5").unwrap_err(),
            DataError::InsufficientData { count: 1 }
        );
        assert_eq!(
            calculate("x 5 y").unwrap_err(),
            DataError::InsufficientData { count: 1 }
        );
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let empty = DataError::EmptyInput.to_string();
        let insufficient = DataError::InsufficientData { count: 1 }.to_string();
        assert_ne!(empty, insufficient);
        assert_eq!(
            insufficient,
            "At least 2 values are required for statistical calculation."
        );
    }

    #[test]
    fn test_sample_input() {
        let calculation = calculate("12, 15, 18, 20, 22").unwrap();
        let stats = &calculation.summary.stats;
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 17.4);
        assert_eq!(stats.median, 18.0);
        assert_eq!(stats.min, 12.0);
        assert_eq!(stats.max, 22.0);
        assert_eq!(stats.range, 10.0);
        assert_eq!(calculation.histogram.bins.len(), 3);
        assert_eq!(calculation.histogram.total_count(), 5);
    }

    #[test]
    fn test_two_values_accepted() {
        let calculation = calculate("1\n2").unwrap();
        assert_eq!(calculation.summary.count(), 2);
    }

    #[test]
    fn test_check_values() {
        assert_eq!(check_values(&[]), Err(DataError::EmptyInput));
        assert_eq!(
            check_values(&[1.0]),
            Err(DataError::InsufficientData { count: 1 })
        );
        assert_eq!(check_values(&[1.0, 1.0]), Ok(()));
    }
}
