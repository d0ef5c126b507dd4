//! Value frequencies and the mode of a dataset.
//!
//! Frequencies are keyed by exact floating-point equality: `0.1 + 0.2` and
//! `0.3` are different keys even though they print almost identically, while
//! `-0.0` and `0.0` compare equal and share the key `0`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown when a dataset has no mode.
pub const NO_MODE: &str = "no mode";

/// Occurrence count of every distinct value, in ascending value order.
///
/// # Examples
///
/// ```
/// use statsheet_stats::mode::FrequencyTable;
///
/// let mut sorted = vec![3.0, 1.0, 3.0, 2.0];
/// sorted.sort_by(f64::total_cmp);
/// let table = FrequencyTable::from_sorted(&sorted);
///
/// assert_eq!(table.as_slice(), &[(1.0, 1), (2.0, 1), (3.0, 2)]);
/// assert_eq!(table.max_frequency(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(f64, usize)>,
}

impl FrequencyTable {
    /// Counts values that are sorted in ascending order.
    ///
    /// Equal values are adjacent after sorting, so each run of equal values
    /// becomes one entry.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let mut entries: Vec<(f64, usize)> = Vec::new();
        for &value in sorted_values {
            // -0.0 is keyed (and displayed) as 0
            let value = if value == 0.0 { 0.0 } else { value };
            match entries.last_mut() {
                Some((key, count)) if *key == value => *count += 1,
                _ => entries.push((value, 1)),
            }
        }
        Self { entries }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no value was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest occurrence count, or `0` for an empty table.
    #[must_use]
    pub fn max_frequency(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Values whose count equals the highest count, ascending.
    pub fn modal_values(&self) -> impl Iterator<Item = f64> + '_ {
        let max_frequency = self.max_frequency();
        self.entries
            .iter()
            .filter(move |(_, count)| *count == max_frequency)
            .map(|(value, _)| *value)
    }

    /// Returns all (value, count) pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, usize)] {
        &self.entries
    }
}

/// The most frequent value(s) of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Every value occurs exactly as often as the others and all are distinct.
    None,
    /// The values sharing the highest frequency, ascending.
    Values(Vec<f64>),
}

impl Mode {
    /// Determines the mode of sorted values.
    ///
    /// When the number of modal values equals the number of input values
    /// (every value is unique), the result is [`Mode::None`]. A single value
    /// is therefore reported as having no mode.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use statsheet_stats::mode::Mode;
    ///
    /// assert_eq!(Mode::from_sorted(&[1.0, 2.0, 2.0, 3.0]), Mode::Values(vec![2.0]));
    /// assert_eq!(Mode::from_sorted(&[1.0, 2.0, 3.0]), Mode::None);
    /// assert_eq!(Mode::from_sorted(&[1.0, 1.0, 2.0, 2.0]).to_string(), "1, 2");
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        let table = FrequencyTable::from_sorted(sorted_values);
        let modes = table.modal_values().collect::<Vec<_>>();
        if modes.len() == sorted_values.len() {
            Self::None
        } else {
            Self::Values(modes)
        }
    }

    /// Returns the modal values, empty for [`Mode::None`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::None => &[],
            Self::Values(values) => values,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str(NO_MODE),
            Self::Values(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
