//! Trailing-edge debounce for automatic saves.

use std::time::{Duration, Instant};

/// Tracks whether an autosave is owed and when it becomes due.
///
/// Every edit calls `touch`, restarting the quiet period. The runtime polls
/// `is_due` once per loop turn and starts a save when it returns true.
#[derive(Debug, Clone)]
pub struct SaveDebounce {
    delay: Duration,
    enabled: bool,
    pending_since: Option<Instant>,
}

impl SaveDebounce {
    pub fn new(delay: Duration, enabled: bool) -> Self {
        Self { delay, enabled, pending_since: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Record an edit at `now`. No-op when autosave is disabled.
    pub fn touch(&mut self, now: Instant) {
        if self.enabled {
            self.pending_since = Some(now);
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.pending_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn clear(&mut self) {
        self.pending_since = None;
    }
}

impl Default for SaveDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn idle_is_never_due() {
        let d = SaveDebounce::default();
        assert!(!d.is_pending());
        assert!(!d.is_due(Instant::now() + 10 * d.delay()));
    }

    #[test]
    fn due_after_quiet_period() {
        let mut d = SaveDebounce::new(1000 * MS, true);
        let t0 = Instant::now();
        d.touch(t0);
        assert!(!d.is_due(t0 + 999 * MS));
        assert!(d.is_due(t0 + 1000 * MS));
    }

    #[test]
    fn burst_of_edits_restarts_timer() {
        let mut d = SaveDebounce::new(1000 * MS, true);
        let t0 = Instant::now();
        for i in 0..5 {
            d.touch(t0 + i * 300 * MS);
        }
        // last edit at t0+1200ms
        assert!(!d.is_due(t0 + 2100 * MS));
        assert!(d.is_due(t0 + 2200 * MS));
    }

    #[test]
    fn clear_cancels() {
        let mut d = SaveDebounce::default();
        let t0 = Instant::now();
        d.touch(t0);
        d.clear();
        assert!(!d.is_due(t0 + d.delay()));
    }

    #[test]
    fn disabled_never_arms() {
        let mut d = SaveDebounce::new(100 * MS, false);
        let t0 = Instant::now();
        d.touch(t0);
        assert!(!d.is_pending());
        assert!(!d.is_due(t0 + Duration::from_secs(5)));
    }
}
