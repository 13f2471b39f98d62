use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// Holds at most one notice; a newer one replaces the current one
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationState {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            current: None,
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Error);
    }

    pub fn show_with_level(&mut self, message: &str, level: NotificationLevel) {
        self.current = Some(Notification {
            message: message.to_string(),
            level,
            shown_at: Instant::now(),
            duration: self.duration,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the notice once its display time is over
    pub fn clear_if_expired(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(3000)
    }
}
