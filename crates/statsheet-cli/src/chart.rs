//! Chart data derived from a calculation, and the slots that own rendered charts.

use statsheet_stats::histogram::Histogram;

/// Frequency bars of a histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramChart {
    /// (label, count) for every bin, in bin order.
    pub bars: Vec<(String, u64)>,
}

impl HistogramChart {
    #[must_use]
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let bars = histogram
            .bins
            .iter()
            .map(|bin| {
                let count = u64::try_from(bin.count).unwrap_or(u64::MAX);
                (bin.label.clone(), count)
            })
            .collect();
        Self { bars }
    }

    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

/// One slice of a [`ProportionChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// Share of all values in this slice, 0-100.
    pub percent: f64,
}

/// Proportional view of a histogram: the share of values in each bin.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    pub slices: Vec<Slice>,
}

impl ProportionChart {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let total = histogram.total_count();
        let slices = histogram
            .bins
            .iter()
            .map(|bin| {
                let percent = if total == 0 {
                    0.0
                } else {
                    100.0 * bin.count as f64 / total as f64
                };
                Slice {
                    label: bin.label.clone(),
                    count: bin.count,
                    percent,
                }
            })
            .collect();
        Self { slices }
    }
}

/// Owner of the chart currently on screen.
///
/// A slot holds at most one chart. Placing a new chart disposes of the
/// previous one, so exactly one chart per slot is alive between calculations.
#[derive(Debug)]
pub struct ChartSlot<C> {
    name: &'static str,
    current: Option<C>,
}

impl<C> ChartSlot<C> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
        }
    }

    /// Places `chart` in the slot and returns the disposed previous chart.
    pub fn replace(&mut self, chart: C) -> Option<C> {
        let previous = self.current.replace(chart);
        if previous.is_some() {
            tracing::debug!(slot = self.name, "replaced chart");
        }
        previous
    }

    /// Removes the chart from the slot and returns it.
    pub fn dispose(&mut self) -> Option<C> {
        let previous = self.current.take();
        if previous.is_some() {
            tracing::debug!(slot = self.name, "disposed chart");
        }
        previous
    }

    #[must_use]
    pub fn get(&self) -> Option<&C> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// The two charts rendered for a calculation.
#[derive(Debug)]
pub struct Charts {
    pub histogram: ChartSlot<HistogramChart>,
    pub proportion: ChartSlot<ProportionChart>,
}

impl Default for Charts {
    fn default() -> Self {
        Self {
            histogram: ChartSlot::new("histogram"),
            proportion: ChartSlot::new("proportion"),
        }
    }
}

impl Charts {
    /// Replaces both charts with ones built from `histogram`.
    pub fn render(&mut self, histogram: &Histogram) {
        self.histogram
            .replace(HistogramChart::from_histogram(histogram));
        self.proportion
            .replace(ProportionChart::from_histogram(histogram));
    }

    pub fn dispose(&mut self) {
        self.histogram.dispose();
        self.proportion.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_chart_bars() {
        let histogram = Histogram::new(&[1.0, 2.0, 3.0, 4.0]);
        let chart = HistogramChart::from_histogram(&histogram);
        assert_eq!(
            chart.bars,
            vec![("1.0-2.5".to_owned(), 2), ("2.5-4.0".to_owned(), 2)]
        );
        assert_eq!(chart.max_count(), 2);
    }

    #[test]
    fn test_proportion_chart_shares() {
        let histogram = Histogram::new(&[12.0, 15.0, 18.0, 20.0, 22.0]);
        let chart = ProportionChart::from_histogram(&histogram);
        let percents = chart.slices.iter().map(|s| s.percent).collect::<Vec<_>>();
        assert_eq!(percents, vec![40.0, 20.0, 40.0]);
        let total: f64 = percents.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_proportion_chart_empty() {
        let chart = ProportionChart::from_histogram(&Histogram::default());
        assert!(chart.slices.is_empty());
    }

    #[test]
    fn test_slot_replace_returns_previous() {
        let mut slot = ChartSlot::new("test");
        assert!(slot.is_empty());
        assert_eq!(slot.replace(1), None);
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.get(), Some(&2));
    }

    #[test]
    fn test_slot_dispose() {
        let mut slot = ChartSlot::new("test");
        slot.replace("chart");
        assert_eq!(slot.dispose(), Some("chart"));
        assert!(slot.is_empty());
        assert_eq!(slot.dispose(), None);
    }

    #[test]
    fn test_charts_render_and_dispose() {
        let mut charts = Charts::default();
        charts.render(&Histogram::new(&[1.0, 2.0]));
        assert_eq!(charts.histogram.get().unwrap().bars.len(), 2);
        assert_eq!(charts.proportion.get().unwrap().slices.len(), 2);

        charts.render(&Histogram::new(&[1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(charts.histogram.get().unwrap().bars.len(), 3);

        charts.dispose();
        assert!(charts.histogram.is_empty());
        assert!(charts.proportion.is_empty());
    }
}
