//! Search input debouncing
//!
//! Turns per-keystroke input into an effective query that only changes once
//! the input has been stable for the full window.
//!
//! The debouncer does not own a clock. Every [`SearchDebouncer::input`] call
//! hands back a [`DebounceTicket`]; whoever drives the debouncer sleeps for
//! `ticket.delay` and then calls [`SearchDebouncer::fire`]. Only the ticket
//! from the most recent input can fire, so starting a new ticket implicitly
//! cancels the previous one.

use std::time::Duration;
use tracing::debug;

/// Default debounce window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle for one pending debounce timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    /// How long to wait before firing
    pub delay: Duration,
}

/// Debounces raw search input into an effective query
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    raw: String,
    effective: String,
    generation: u64,
    /// Generation of the single pending timer, if any
    pending: Option<u64>,
}

impl SearchDebouncer {
    /// Create a debouncer whose raw and effective query both start at `initial`
    pub fn new(initial: impl Into<String>, window: Duration) -> Self {
        let initial = initial.into();
        Self {
            window,
            raw: initial.clone(),
            effective: initial,
            generation: 0,
            pending: None,
        }
    }

    /// Record a keystroke and restart the timer
    pub fn input(&mut self, raw: impl Into<String>) -> DebounceTicket {
        self.raw = raw.into();
        self.generation += 1;
        self.pending = Some(self.generation);

        DebounceTicket {
            generation: self.generation,
            delay: self.window,
        }
    }

    /// Timer expiry for `ticket`
    ///
    /// Returns the new effective query when the ticket is still the pending
    /// one and the settled input differs from the current effective query.
    /// Inputs that differ only in surrounding whitespace count as the same
    /// query, matching how the fetcher normalizes them.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.pending != Some(ticket.generation) {
            debug!(
                ticket = ticket.generation,
                pending = ?self.pending,
                "Ignoring superseded debounce timer"
            );
            return None;
        }
        self.pending = None;

        if self.raw.trim() == self.effective.trim() {
            return None;
        }

        self.effective = self.raw.clone();
        debug!(query = %self.effective, "Effective query settled");
        Some(self.effective.clone())
    }

    /// Cancel the pending timer, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a timer is pending
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Latest raw input
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Current effective query
    pub fn effective(&self) -> &str {
        &self.effective
    }

    /// Debounce window
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_ticket_fires() {
        let mut debouncer = SearchDebouncer::new("arijit", DEFAULT_DEBOUNCE);

        let t1 = debouncer.input("d");
        let t2 = debouncer.input("da");
        let t3 = debouncer.input("daf");

        assert_eq!(debouncer.fire(t1), None);
        assert_eq!(debouncer.fire(t2), None);
        assert_eq!(debouncer.fire(t3), Some("daf".to_string()));
        assert_eq!(debouncer.effective(), "daf");
    }

    #[test]
    fn rapid_keystrokes_emit_exactly_once() {
        let mut debouncer = SearchDebouncer::new("", DEFAULT_DEBOUNCE);
        let tickets: Vec<_> = ["q", "qu", "que", "quee", "queen"]
            .iter()
            .map(|s| debouncer.input(*s))
            .collect();

        let emissions: Vec<String> = tickets
            .into_iter()
            .filter_map(|t| debouncer.fire(t))
            .collect();

        assert_eq!(emissions, vec!["queen".to_string()]);
    }

    #[test]
    fn ticket_fires_at_most_once() {
        let mut debouncer = SearchDebouncer::new("", DEFAULT_DEBOUNCE);
        let ticket = debouncer.input("abba");
        assert!(debouncer.fire(ticket).is_some());
        assert!(debouncer.fire(ticket).is_none());
    }

    #[test]
    fn settling_on_unchanged_query_emits_nothing() {
        let mut debouncer = SearchDebouncer::new("arijit", DEFAULT_DEBOUNCE);
        debouncer.input("arijitx");
        let ticket = debouncer.input("arijit");

        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn whitespace_only_change_emits_nothing() {
        let mut debouncer = SearchDebouncer::new("arijit", DEFAULT_DEBOUNCE);
        let ticket = debouncer.input("  arijit ");

        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.effective(), "arijit");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_prevents_late_emission() {
        let mut debouncer = SearchDebouncer::new("", DEFAULT_DEBOUNCE);
        let ticket = debouncer.input("late");
        debouncer.cancel();

        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.effective(), "");
        assert_eq!(debouncer.raw(), "late");
    }

    #[test]
    fn ticket_carries_window() {
        let mut debouncer = SearchDebouncer::new("", Duration::from_millis(250));
        assert_eq!(debouncer.input("x").delay, Duration::from_millis(250));
    }

    #[test]
    fn empty_input_can_settle() {
        let mut debouncer = SearchDebouncer::new("arijit", DEFAULT_DEBOUNCE);
        let ticket = debouncer.input("");
        assert_eq!(debouncer.fire(ticket), Some(String::new()));
    }
}
