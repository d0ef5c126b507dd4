//! Numeric core of the statsheet calculator.
//!
//! This crate turns freeform numeric text into summary statistics:
//!
//! - **Parsing**: Extract numbers from comma/whitespace separated text
//! - **Descriptive statistics**: Count, mean, median, range, population variance, standard deviation
//! - **Mode**: Most frequent values, or the "no mode" sentinel
//! - **Percentiles**: Linear interpolation of order statistics for P5-P95
//! - **Histogram generation**: Equal-width bins between the minimum and maximum
//! - **Formatting**: Fixed-point display of values, rounding ties up
//! - **Calculation**: The whole pipeline, including the minimum input size policy
//!
//! # Modules
//!
//! - [`parse`]: Numeric input parsing
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`mode`]: Value frequencies and mode detection
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`summary`]: Summary record combining all measures
//! - [`format`]: Fixed-point formatting of displayed numbers
//! - [`calculation`]: Input-to-result pipeline used by presentation layers
//!
//! # Examples
//!
//! ## Parsing input
//!
//! ```
//! use statsheet_stats::parse::parse_numbers;
//!
//! assert_eq!(parse_numbers("1, 2\n3 4"), vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! ## Computing a summary
//!
//! ```
//! use statsheet_stats::summary::StatisticsSummary;
//!
//! let summary = StatisticsSummary::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(summary.stats.mean, 2.5);
//! assert_eq!(summary.stats.variance, 1.25);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use statsheet_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(&values);
//! assert_eq!(histogram.bins.len(), 4);
//! assert_eq!(histogram.total_count(), 10);
//! ```
//!
//! ## Running a calculation
//!
//! ```
//! use statsheet_stats::calculation;
//!
//! let calculation = calculation::calculate("5, 5, 7").unwrap();
//! assert_eq!(calculation.summary.mode.to_string(), "5");
//! ```

pub mod calculation;
pub mod descriptive;
pub mod format;
pub mod histogram;
pub mod mode;
pub mod parse;
pub mod percentiles;
pub mod summary;
