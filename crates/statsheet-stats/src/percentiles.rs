use std::collections::BTreeMap;

use serde::Serialize;

/// The percentile ranks reported in a summary: 5, 10, ..., 95.
pub const PERCENTILE_RANKS: [u32; 19] = [
    5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
];

/// Precomputed percentile values for a dataset.
///
/// This structure stores rank-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use statsheet_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25, 50, 75]);
///
/// assert_eq!(percentiles.get(50), Some(5.5));
/// assert_eq!(percentiles.get(25), Some(3.25));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percentiles {
    /// Rank-value pairs, ordered by rank (0-100).
    values: BTreeMap<u32, f64>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// An empty dataset yields an empty set of percentiles.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use statsheet_stats::percentiles::{PERCENTILE_RANKS, Percentiles};
    ///
    /// let percentiles = Percentiles::from_sorted(&[7.0], &PERCENTILE_RANKS);
    /// assert_eq!(percentiles.len(), 19);
    /// assert!(percentiles.iter().all(|(_, value)| value == 7.0));
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], ranks: &[u32]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() {
            return Self::default();
        }
        let values = ranks
            .iter()
            .map(|&rank| (rank, compute_percentile(sorted_values, rank)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    #[must_use]
    pub fn new(values: &[f64], ranks: &[u32]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, ranks)
    }

    /// Gets the value at a specific rank.
    ///
    /// Returns `None` if the rank was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use statsheet_stats::percentiles::Percentiles;
    ///
    /// let percentiles = Percentiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[50, 95]);
    ///
    /// assert_eq!(percentiles.get(50), Some(3.0));
    /// assert_eq!(percentiles.get(25), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, rank: u32) -> Option<f64> {
        self.values.get(&rank).copied()
    }

    /// Number of precomputed ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no rank was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over all (rank, value) pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.values.iter().map(|(&rank, &value)| (rank, value))
    }
}

/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between order statistics. The
/// fractional index is `(rank / 100) * (n - 1)`; when it falls between two
/// positions, the neighbouring values are blended by the fractional part.
///
/// # Returns
///
/// The value at the specified rank. Returns `f64::NAN` if the input is empty.
/// Ranks above 100 are read as 100.
///
/// # Examples
///
/// ```
/// use statsheet_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
///
/// // index = 0.5 * 9 = 4.5, halfway between 5.0 and 6.0
/// assert_eq!(compute_percentile(&values, 50), 5.5);
/// assert_eq!(compute_percentile(&values, 0), 1.0);
/// assert_eq!(compute_percentile(&values, 100), 10.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], rank: u32) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = rank.min(100);
    let last = sorted_values.len() - 1;
    let index = (f64::from(rank) / 100.0) * (last as f64);
    let lower = index.floor();
    let upper = index.ceil();
    let weight = index - lower;

    let lower_idx = lower as usize;
    let upper_idx = upper as usize;
    if lower_idx == upper_idx {
        sorted_values[lower_idx]
    } else {
        sorted_values[lower_idx] * (1.0 - weight) + sorted_values[upper_idx] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_constant() {
        assert_eq!(PERCENTILE_RANKS.len(), 19);
        assert!(PERCENTILE_RANKS.iter().all(|rank| rank % 5 == 0));
        assert_eq!(PERCENTILE_RANKS.first(), Some(&5));
        assert_eq!(PERCENTILE_RANKS.last(), Some(&95));
    }

    #[test]
    fn test_empty_values() {
        assert!(compute_percentile(&[], 50).is_nan());
        assert!(Percentiles::from_sorted(&[], &PERCENTILE_RANKS).is_empty());
    }

    #[test]
    fn test_median_odd_count() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_percentile(&values, 50), 3.0);
    }

    #[test]
    fn test_interpolated_median_even_count() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(compute_percentile(&values, 50), 5.5);
    }

    #[test]
    fn test_interpolation_weights() {
        let values = [10.0, 20.0];
        // index = 0.25 * 1 = 0.25
        assert_eq!(compute_percentile(&values, 25), 12.5);
        // index = 0.75 * 1 = 0.75
        assert_eq!(compute_percentile(&values, 75), 17.5);
    }

    #[test]
    fn test_exact_positions() {
        let values = [0.0, 10.0, 20.0, 30.0, 40.0];
        // index = 0.25 * 4 = 1
        assert_eq!(compute_percentile(&values, 25), 10.0);
        assert_eq!(compute_percentile(&values, 75), 30.0);
    }

    #[test]
    fn test_rank_bounds() {
        let values = [0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(compute_percentile(&values, 0), 0.0);
        assert_eq!(compute_percentile(&values, 100), 40.0);
        assert_eq!(compute_percentile(&values, 250), 40.0);
    }

    #[test]
    fn test_all_ranks_single_value() {
        let percentiles = Percentiles::from_sorted(&[42.0], &PERCENTILE_RANKS);
        assert_eq!(percentiles.len(), 19);
        for rank in PERCENTILE_RANKS {
            assert_eq!(percentiles.get(rank), Some(42.0));
        }
    }

    #[test]
    fn test_iter_ascending_ranks() {
        let percentiles = Percentiles::new(&[3.0, 1.0, 2.0], &[90, 10, 50]);
        let ranks = percentiles.iter().map(|(rank, _)| rank).collect::<Vec<_>>();
        assert_eq!(ranks, vec![10, 50, 90]);
    }

    #[test]
    fn test_serialize_as_map() {
        let percentiles = Percentiles::new(&[1.0, 3.0], &[50]);
        let json = serde_json::to_string(&percentiles).unwrap();
        assert_eq!(json, r#"{"50":2.0}"#);
    }
}
