//! Plain-text report of a calculation.

use std::io;

use statsheet_stats::{calculation::Calculation, format::to_fixed};

use crate::chart::{HistogramChart, ProportionChart};

const BAR_WIDTH: u64 = 30;
const PERCENTILES_PER_ROW: usize = 5;

/// Writes a human-readable report of `calculation`.
///
/// Numeric fields are printed with `precision` decimal places.
pub fn write_report<W>(writer: &mut W, calculation: &Calculation, precision: usize) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    let summary = &calculation.summary;
    let stats = &summary.stats;
    let num = |value: f64| to_fixed(value, precision);

    writeln!(writer, "Statistics Summary")?;
    writeln!(writer, "==================")?;
    writeln!(writer, "  Count:    {}", stats.count)?;
    writeln!(writer, "  Mean:     {}", num(stats.mean))?;
    writeln!(writer, "  Median:   {}", num(stats.median))?;
    writeln!(writer, "  Mode:     {}", summary.mode)?;
    writeln!(writer, "  Min:      {}", num(stats.min))?;
    writeln!(writer, "  Max:      {}", num(stats.max))?;
    writeln!(writer, "  Range:    {}", num(stats.range))?;
    writeln!(writer, "  StdDev:   {}", num(stats.std_dev))?;
    writeln!(writer, "  Variance: {}", num(stats.variance))?;
    writeln!(writer)?;

    writeln!(writer, "Percentiles")?;
    writeln!(writer, "-----------")?;
    let cells = summary
        .percentiles
        .iter()
        .map(|(rank, value)| format!("P{rank:02}: {:>12}", num(value)))
        .collect::<Vec<_>>();
    for row in cells.chunks(PERCENTILES_PER_ROW) {
        writeln!(writer, "  {}", row.join("  "))?;
    }
    writeln!(writer)?;

    writeln!(writer, "Histogram")?;
    writeln!(writer, "---------")?;
    let bars = HistogramChart::from_histogram(&calculation.histogram);
    let shares = ProportionChart::from_histogram(&calculation.histogram);
    let label_width = bars
        .bars
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let max_count = bars.max_count().max(1);
    for ((label, count), slice) in bars.bars.iter().zip(&shares.slices) {
        let filled = usize::try_from(count * BAR_WIDTH / max_count).unwrap_or(0);
        writeln!(
            writer,
            "  {label:>label_width$} | {:>5} | {:<bar$} {:>5}%",
            slice.count,
            "#".repeat(filled),
            to_fixed(slice.percent, 1),
            bar = usize::try_from(BAR_WIDTH).unwrap_or(0),
        )?;
    }

    Ok(())
}
