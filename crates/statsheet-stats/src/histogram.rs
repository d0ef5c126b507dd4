use std::ops::Range;

use serde::Serialize;

use crate::format::to_fixed;

/// Upper bound on the number of bins chosen by [`default_bin_count`].
pub const MAX_BINS: usize = 10;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the range between the minimum and maximum values into
/// equal-width bins and counts the values falling into each bin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins comprising the histogram, ordered by range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    ///
    /// The last bin also holds values equal to its end, i.e. the maximum.
    pub range: Range<f64>,
    /// Display label of the range, `"start-end"` with one decimal place.
    pub label: String,
    /// The number of values that fall within this bin's range.
    pub count: usize,
}

/// Number of bins used for `n` values: `min(10, ceil(sqrt(n)))`.
///
/// # Examples
///
/// ```
/// use statsheet_stats::histogram::default_bin_count;
///
/// assert_eq!(default_bin_count(1), 1);
/// assert_eq!(default_bin_count(5), 3);
/// assert_eq!(default_bin_count(16), 4);
/// assert_eq!(default_bin_count(1000), 10);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn default_bin_count(n: usize) -> usize {
    let bins = (n as f64).sqrt().ceil() as usize;
    bins.min(MAX_BINS)
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsheet_stats::histogram::Histogram;
    /// let histogram = Histogram::new(&[12.0, 15.0, 18.0, 20.0, 22.0]);
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.total_count(), 5);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// The bin count is `min(10, ceil(sqrt(n)))` and every bin has the width
    /// `(max - min) / bin_count`. When all values are equal, the width falls
    /// back to `1.0` and all values land in the first bin.
    ///
    /// An empty dataset yields a histogram without bins.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statsheet_stats::histogram::Histogram;
    /// let histogram = Histogram::from_sorted(&[1.0, 2.0, 3.0, 4.0]);
    /// let labels = histogram.bins.iter().map(|bin| bin.label.as_str()).collect::<Vec<_>>();
    /// assert_eq!(labels, ["1.0-2.5", "2.5-4.0"]);
    /// assert_eq!(histogram.counts(), vec![2, 2]);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        Self::with_bin_count(sorted_values, default_bin_count(sorted_values.len()))
    }

    /// Creates a histogram with an explicit number of bins from pre-sorted values.
    ///
    /// Values are assigned to bin `floor((value - min) / width)`, clamped to the
    /// last bin so the maximum value does not overflow.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn with_bin_count(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self::default();
        };
        if num_bins == 0 {
            return Self::default();
        }

        let mut bin_width = (max - min) / num_bins as f64;
        if bin_width <= 0.0 || !bin_width.is_finite() {
            // Edge case: distribution is concentrated at a single value
            bin_width = 1.0;
        }

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                let start = min + bin_idx as f64 * bin_width;
                let end = start + bin_width;
                HistogramBin {
                    range: start..end,
                    label: format!("{}-{}", to_fixed(start, 1), to_fixed(end, 1)),
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        let last = num_bins - 1;
        for &value in sorted_values {
            let position = ((value - min) / bin_width).floor();
            // `position` is non-negative because `min` is the smallest value
            let idx = (position as usize).min(last);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Bin counts in bin order.
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}
