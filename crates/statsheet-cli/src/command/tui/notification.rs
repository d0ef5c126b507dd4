use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    pub fn color(self) -> Color {
        match self {
            NotificationKind::Success => Color::Green,
            NotificationKind::Info => Color::Cyan,
        }
    }
}

/// Transient message shown at the top of the screen.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TIMEOUT
    }
}
