use serde::Serialize;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency, dispersion,
/// and spread for a dataset of `f64` values. The dataset is treated as a whole
/// population, so the variance uses `n` as its divisor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The difference between the maximum and minimum values.
    pub range: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values, this is the average of the two middle values.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The standard deviation of the dataset (`sqrt(variance)`).
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort a copy of the values internally before computing statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsheet_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 4.0);
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.variance, 1.25);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::with_sorted(values, &sorted)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsheet_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[12.0, 15.0, 18.0, 20.0, 22.0]).unwrap();
    /// assert_eq!(stats.median, 18.0);
    /// assert_eq!(stats.range, 10.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        Self::with_sorted(sorted_values, sorted_values)
    }

    /// Computes descriptive statistics from values and their sorted copy.
    ///
    /// Sums are accumulated in the order of `values`; order statistics are read
    /// from `sorted_values`.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order, or if the
    /// two slices differ in length.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn with_sorted(values: &[f64], sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        assert_eq!(
            values.len(),
            sorted_values.len(),
            "sorted copy must have the same length"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;

        let mean = values.iter().sum::<f64>() / n;
        let median = if count % 2 == 0 {
            (sorted_values[count / 2 - 1] + sorted_values[count / 2]) / 2.0
        } else {
            sorted_values[count / 2]
        };
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            range: max - min,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(DescriptiveStats::new(&[]), None);
        assert_eq!(DescriptiveStats::from_sorted(&[]), None);
    }

    #[test]
    fn test_even_count() {
        let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.variance, 1.25);
        assert_eq!(stats.std_dev, 1.25_f64.sqrt());
    }

    #[test]
    fn test_odd_count() {
        let stats = DescriptiveStats::new(&[22.0, 12.0, 20.0, 15.0, 18.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 17.4);
        assert_eq!(stats.median, 18.0);
        assert_eq!(stats.min, 12.0);
        assert_eq!(stats.max, 22.0);
        assert_eq!(stats.range, 10.0);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new(&[5.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_population_variance() {
        // Sample variance would be 32/7; population variance divides by n.
        let stats = DescriptiveStats::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_negative_values() {
        let stats = DescriptiveStats::new(&[-3.0, -1.0, -2.0]).unwrap();
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, -1.0);
        assert_eq!(stats.median, -2.0);
        assert_eq!(stats.range, 2.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0, 2.0]);
    }
}
