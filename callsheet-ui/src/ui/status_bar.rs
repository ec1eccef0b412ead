use std::time::{Duration, Instant};

use crate::action::StatusLevel;

/// How long a toast stays visible
fn ttl(level: StatusLevel) -> Duration {
    match level {
        StatusLevel::Info => Duration::from_secs(3),
        StatusLevel::Warning => Duration::from_secs(5),
        StatusLevel::Error => Duration::from_secs(8),
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub timestamp: Instant,
}

impl StatusMessage {
    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) > ttl(self.level)
    }
}

/// Recent toasts; the newest unexpired one is shown on the frame.
pub struct StatusBar {
    messages: Vec<StatusMessage>,
    max: usize,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self { messages: Vec::new(), max: 32 }
    }

    pub fn push(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.push_at(text, level, Instant::now());
    }

    fn push_at(&mut self, text: impl Into<String>, level: StatusLevel, timestamp: Instant) {
        self.messages.push(StatusMessage { text: text.into(), level, timestamp });
        if self.messages.len() > self.max {
            self.messages.remove(0);
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.messages.iter().rev().find(|m| !m.is_expired_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_current() {
        let mut bar = StatusBar::new();
        assert!(bar.current().is_none());
        bar.push("Call sheet saved successfully!", StatusLevel::Info);
        assert_eq!(bar.current().map(|m| m.text.as_str()), Some("Call sheet saved successfully!"));
    }

    #[test]
    fn info_expires_before_error() {
        let mut bar = StatusBar::new();
        let t0 = Instant::now();
        bar.push_at("export failed", StatusLevel::Error, t0);
        bar.push_at("saved", StatusLevel::Info, t0);

        let later = t0 + Duration::from_secs(4);
        assert_eq!(bar.current_at(later).map(|m| m.text.as_str()), Some("export failed"));
        assert!(bar.current_at(t0 + Duration::from_secs(9)).is_none());
    }

    #[test]
    fn max_cap_evicts_oldest() {
        let mut bar = StatusBar { messages: Vec::new(), max: 2 };
        bar.push("a", StatusLevel::Info);
        bar.push("b", StatusLevel::Info);
        bar.push("c", StatusLevel::Info);
        assert_eq!(bar.messages.len(), 2);
        assert_eq!(bar.messages[0].text, "b");
    }
}
