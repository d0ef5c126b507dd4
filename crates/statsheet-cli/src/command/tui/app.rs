use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Style},
    text::Text,
};
use statsheet_stats::{calculation, summary::StatisticsSummary};

use crate::chart::Charts;

use super::{
    notification::{Notification, NotificationKind},
    widgets::{
        ConfirmDialog, HistogramBars, InputLine, NotificationBar, PercentileGrid, ProportionBars,
        SummaryPanel,
    },
};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct App {
    input: String,
    error: Option<String>,
    summary: Option<StatisticsSummary>,
    charts: Charts,
    notification: Option<Notification>,
    confirming_clear: bool,
    should_exit: bool,
}

impl App {
    pub fn new(input: String) -> Self {
        Self {
            input,
            error: None,
            summary: None,
            charts: Charts::default(),
            notification: None,
            confirming_clear: false,
            should_exit: false,
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_exit {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                self.handle_event(&event, Instant::now());
            }
            self.expire_notification(Instant::now());
        }
        Ok(())
    }

    /// Calculates statistics of the current input.
    ///
    /// On failure the error line is set and the previous results stay on screen.
    pub(crate) fn calculate(&mut self, now: Instant) {
        self.error = None;
        match calculation::calculate(&self.input) {
            Ok(calculation) => {
                tracing::debug!(count = calculation.summary.count(), "calculated statistics");
                self.charts.render(&calculation.histogram);
                self.summary = Some(calculation.summary);
                self.notify(NotificationKind::Success, "Statistics calculated!", now);
            }
            Err(err) => {
                tracing::debug!(%err, "rejected input");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Asks for confirmation before clearing, unless there is nothing to clear.
    pub(crate) fn request_clear(&mut self, now: Instant) {
        if self.input.trim().is_empty() {
            self.notify(NotificationKind::Info, "No data to clear.", now);
            return;
        }
        self.confirming_clear = true;
    }

    pub(crate) fn confirm_clear(&mut self, now: Instant) {
        self.confirming_clear = false;
        self.input.clear();
        self.error = None;
        self.summary = None;
        self.charts.dispose();
        self.notify(NotificationKind::Success, "Data cleared!", now);
    }

    pub(crate) fn cancel_clear(&mut self) {
        self.confirming_clear = false;
    }

    fn notify(&mut self, kind: NotificationKind, message: &str, now: Instant) {
        self.notification = Some(Notification::new(kind, message, now));
    }

    pub(crate) fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired(now))
        {
            self.notification = None;
        }
    }

    pub(crate) fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Some(key) = event.as_key_event()
            && key.kind == KeyEventKind::Press
        {
            if self.confirming_clear {
                self.handle_confirm_key(key, now);
            } else {
                self.handle_input_key(key, now);
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.confirm_clear(now),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.cancel_clear(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if ctrl => self.should_exit = true,
            KeyCode::Char('l') if ctrl => self.request_clear(now),
            KeyCode::Enter => self.calculate(now),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [
            notification_area,
            input_area,
            error_area,
            main_area,
            help_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Length(34), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(main_area);

        let [summary_pane, percentile_pane] =
            Layout::vertical([Constraint::Length(11), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(left_area);

        let [histogram_pane, proportion_pane] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(right_area);

        if let Some(notification) = &self.notification {
            frame.render_widget(NotificationBar { notification }, notification_area);
        }
        frame.render_widget(InputLine { input: &self.input }, input_area);
        if let Some(error) = &self.error {
            let error_text = Text::from(error.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(error_text, error_area);
        }

        frame.render_widget(
            SummaryPanel {
                summary: self.summary.as_ref(),
            },
            summary_pane,
        );
        frame.render_widget(
            PercentileGrid {
                summary: self.summary.as_ref(),
            },
            percentile_pane,
        );
        frame.render_widget(
            HistogramBars {
                chart: self.charts.histogram.get(),
            },
            histogram_pane,
        );
        frame.render_widget(
            ProportionBars {
                chart: self.charts.proportion.get(),
            },
            proportion_pane,
        );

        let help_text = Text::from("Enter: Calculate | Ctrl-L: Clear | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);

        if self.confirming_clear {
            frame.render_widget(ConfirmDialog, frame.area());
        }
    }
}
