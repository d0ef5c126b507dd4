use serde::Serialize;

use crate::{
    descriptive::DescriptiveStats,
    histogram::Histogram,
    mode::Mode,
    percentiles::{PERCENTILE_RANKS, Percentiles},
};

/// Summary statistics of a numeric dataset.
///
/// This structure provides a complete statistical overview of a dataset by combining:
/// - Basic descriptive statistics (count, mean, median, variance, standard deviation, etc.)
/// - The mode
/// - Percentile values P5, P10, ..., P95
/// - A sorted copy of the data, reusable for histogram binning
///
/// # Examples
///
/// ```
/// use statsheet_stats::summary::StatisticsSummary;
///
/// let summary = StatisticsSummary::compute(&[12.0, 15.0, 18.0, 20.0, 22.0]).unwrap();
///
/// assert_eq!(summary.count(), 5);
/// assert_eq!(summary.stats.mean, 17.4);
/// assert_eq!(summary.stats.median, 18.0);
/// assert_eq!(summary.mode.to_string(), "no mode");
/// assert_eq!(summary.percentiles.get(50), Some(18.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    /// Basic descriptive statistics for the dataset.
    #[serde(flatten)]
    pub stats: DescriptiveStats,
    /// The most frequent value(s).
    pub mode: Mode,
    /// Percentile values for every rank in [`PERCENTILE_RANKS`].
    pub percentiles: Percentiles,
    /// The input values in ascending order.
    pub sorted: Vec<f64>,
}

impl StatisticsSummary {
    /// Computes the summary of `values`.
    ///
    /// # Returns
    ///
    /// * `Some(StatisticsSummary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    #[must_use]
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let stats = DescriptiveStats::with_sorted(values, &sorted)?;
        let mode = Mode::from_sorted(&sorted);
        let percentiles = Percentiles::from_sorted(&sorted, &PERCENTILE_RANKS);

        Some(Self {
            stats,
            mode,
            percentiles,
            sorted,
        })
    }

    /// Number of values in the dataset.
    #[must_use]
    pub fn count(&self) -> usize {
        self.stats.count
    }

    /// Builds the histogram of the summarized values.
    ///
    /// Reuses the sorted copy held by the summary.
    #[must_use]
    pub fn histogram(&self) -> Histogram {
        Histogram::from_sorted(&self.sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(StatisticsSummary::compute(&[]), None);
    }

    #[test]
    fn test_count_matches_input() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let summary = StatisticsSummary::compute(&values).unwrap();
        assert_eq!(summary.count(), values.len());
        assert_eq!(summary.sorted, vec![1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 9.0]);
    }

    #[test]
    fn test_four_values() {
        let summary = StatisticsSummary::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.stats.mean, 2.5);
        assert_eq!(summary.stats.median, 2.5);
        assert_eq!(summary.stats.variance, 1.25);
        assert_eq!(summary.stats.std_dev, 1.25_f64.sqrt());
        assert_eq!(summary.mode, Mode::None);
    }

    #[test]
    fn test_single_value() {
        let summary = StatisticsSummary::compute(&[5.0]).unwrap();
        assert_eq!(summary.count(), 1);
        assert_eq!(summary.stats.mean, 5.0);
        assert_eq!(summary.stats.variance, 0.0);
        assert_eq!(summary.mode.to_string(), "no mode");
        assert_eq!(summary.percentiles.len(), 19);
        assert!(summary.percentiles.iter().all(|(_, value)| value == 5.0));
    }

    #[test]
    fn test_percentile_median_even() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let summary = StatisticsSummary::compute(&values).unwrap();
        assert_eq!(summary.percentiles.get(50), Some(5.5));
        assert_eq!(summary.percentiles.get(50), Some(summary.stats.median));
    }

    #[test]
    fn test_percentile_median_odd() {
        let summary = StatisticsSummary::compute(&[9.0, 1.0, 5.0, 3.0, 7.0]).unwrap();
        assert_eq!(summary.percentiles.get(50), Some(summary.stats.median));
    }

    #[test]
    fn test_sample_scenario() {
        let summary = StatisticsSummary::compute(&[12.0, 15.0, 18.0, 20.0, 22.0]).unwrap();
        assert_eq!(summary.count(), 5);
        assert_eq!(summary.stats.mean, 17.4);
        assert_eq!(summary.stats.median, 18.0);
        assert_eq!(summary.stats.min, 12.0);
        assert_eq!(summary.stats.max, 22.0);
        assert_eq!(summary.stats.range, 10.0);
    }

    #[test]
    fn test_mode_reported() {
        let summary = StatisticsSummary::compute(&[2.0, 3.0, 2.0, 8.0]).unwrap();
        assert_eq!(summary.mode, Mode::Values(vec![2.0]));
    }

    #[test]
    fn test_idempotent() {
        let values = [0.1, 0.7, 0.2, 0.7, 1e-3, 42.0];
        let first = StatisticsSummary::compute(&values);
        let second = StatisticsSummary::compute(&values);
        assert_eq!(first, second);
    }

    #[test]
    fn test_histogram_reuses_sorted() {
        let values = [5.0, 1.0, 3.0, 2.0, 4.0];
        let summary = StatisticsSummary::compute(&values).unwrap();
        assert_eq!(summary.histogram(), Histogram::new(&values));
    }

    #[test]
    fn test_serialize_fields() {
        let summary = StatisticsSummary::compute(&[1.0, 2.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["mean"], 1.5);
        assert_eq!(json["mode"], "no mode");
        assert_eq!(json["percentiles"].as_object().unwrap().len(), 19);
        assert_eq!(json["sorted"], serde_json::json!([1.0, 2.0]));
    }
}
