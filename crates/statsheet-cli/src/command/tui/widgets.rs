use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    prelude::Direction,
    style::{Color, Modifier, Style, Stylize as _},
    symbols::merge::MergeStrategy,
    text::{Line, Text},
    widgets::{Bar, BarChart, Block, Clear, Paragraph, Widget},
};
use statsheet_stats::{format::to_fixed, summary::StatisticsSummary};

use crate::chart::{HistogramChart, ProportionChart};

use super::notification::Notification;

/// Placeholder shown for statistics before a calculation.
const EMPTY_VALUE: &str = "-";

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| EMPTY_VALUE.to_owned(), |value| to_fixed(value, 2))
}

pub struct NotificationBar<'a> {
    pub notification: &'a Notification,
}

impl Widget for NotificationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = Style::default()
            .fg(Color::Black)
            .bg(self.notification.kind.color())
            .add_modifier(Modifier::BOLD);
        Text::from(format!(" {} ", self.notification.message))
            .style(style)
            .centered()
            .render(area, buf);
    }
}

pub struct InputLine<'a> {
    pub input: &'a str,
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = Line::from(vec![
            self.input.into(),
            "_".fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
        ]);
        Paragraph::new(line)
            .block(Block::bordered().title("Data (numbers separated by commas, spaces or newlines)"))
            .render(area, buf);
    }
}

pub struct SummaryPanel<'a> {
    pub summary: Option<&'a StatisticsSummary>,
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let stats = self.summary.map(|summary| &summary.stats);
        let field = |f: fn(&StatisticsSummary) -> f64| format_value(self.summary.map(f));

        let count = stats.map_or_else(|| EMPTY_VALUE.to_owned(), |s| s.count.to_string());
        let mode = self
            .summary
            .map_or_else(|| EMPTY_VALUE.to_owned(), |s| s.mode.to_string());

        let text = vec![
            Line::raw(format!("  Count:    {count:>14}")),
            Line::raw(format!("  Mean:     {:>14}", field(|s| s.stats.mean))),
            Line::raw(format!("  Median:   {:>14}", field(|s| s.stats.median))),
            Line::raw(format!("  Mode:     {mode:>14}")),
            Line::raw(format!("  Min:      {:>14}", field(|s| s.stats.min))),
            Line::raw(format!("  Max:      {:>14}", field(|s| s.stats.max))),
            Line::raw(format!("  Range:    {:>14}", field(|s| s.stats.range))),
            Line::raw(format!("  StdDev:   {:>14}", field(|s| s.stats.std_dev))),
            Line::raw(format!("  Variance: {:>14}", field(|s| s.stats.variance))),
        ];

        Paragraph::new(text)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title("Statistics"),
            )
            .render(area, buf);
    }
}

pub struct PercentileGrid<'a> {
    pub summary: Option<&'a StatisticsSummary>,
}

impl Widget for PercentileGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title("Percentiles");

        let cells = self
            .summary
            .map(|summary| {
                summary
                    .percentiles
                    .iter()
                    .map(|(rank, value)| format!("P{rank:02} {:>9}", format_value(Some(value))))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        let text = cells
            .chunks(2)
            .map(|row| Line::raw(format!("  {}", row.join("  "))))
            .collect::<Vec<_>>();

        Paragraph::new(text).block(block).render(area, buf);
    }
}

pub struct HistogramBars<'a> {
    pub chart: Option<&'a HistogramChart>,
}

impl Widget for HistogramBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title("Histogram (frequency)");
        let Some(chart) = self.chart else {
            block.render(area, buf);
            return;
        };

        let bars = chart
            .bars
            .iter()
            .map(|(label, count)| {
                Bar::with_label(label.clone(), *count).text_value(format!("{count}"))
            })
            .collect::<Vec<_>>();
        BarChart::new(bars)
            .block(block)
            .direction(Direction::Horizontal)
            .bar_style(Style::default().fg(Color::LightBlue))
            .bar_gap(0)
            .render(area, buf);
    }
}

pub struct ProportionBars<'a> {
    pub chart: Option<&'a ProportionChart>,
}

impl Widget for ProportionBars<'_> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title("Share per bin (%)");
        let Some(chart) = self.chart else {
            block.render(area, buf);
            return;
        };

        // Bar values are tenths of a percent
        let bars = chart
            .slices
            .iter()
            .map(|slice| {
                let value = (slice.percent * 10.0).round() as u64;
                Bar::with_label(slice.label.clone(), value)
                    .text_value(format!("{}% ({})", to_fixed(slice.percent, 1), slice.count))
            })
            .collect::<Vec<_>>();
        BarChart::new(bars)
            .block(block)
            .direction(Direction::Horizontal)
            .bar_style(Style::default().fg(Color::Magenta))
            .bar_gap(0)
            .max(1000)
            .render(area, buf);
    }
}

pub struct ConfirmDialog;

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [area] = Layout::horizontal([Constraint::Length(50)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(5)])
            .flex(Flex::Center)
            .areas(area);

        let text = Text::from(vec![
            Line::raw("Clear all data and results?"),
            Line::raw(""),
            Line::raw("y/Enter: Clear | n/Esc: Cancel").fg(Color::DarkGray),
        ])
        .centered();

        Clear.render(area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title("Confirm")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}
