#![forbid(unsafe_code)]

//! Inactivity timer for the transient control overlay.
//!
//! Any activity (remote key, mouse, or the synthetic show-controls intent)
//! reveals the overlay and arms a single deadline ten seconds out. Showing
//! again before expiry replaces the deadline instead of queueing a second
//! timer.

use std::time::{Duration, Instant};

/// How long the overlay stays visible after the last activity.
pub const CONTROLS_HIDE_AFTER: Duration = Duration::from_secs(10);

/// Deadline-based visibility state for the control overlay.
///
/// Holds at most one deadline; time is passed in explicitly so the timer is
/// deterministic under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsTimer {
    deadline: Option<Instant>,
}

impl ControlsTimer {
    /// Create a timer with the overlay hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Reveal the overlay and (re)arm the hide deadline.
    pub fn show(&mut self, now: Instant) {
        self.deadline = Some(now + CONTROLS_HIDE_AFTER);
    }

    /// Hide the overlay immediately and disarm the deadline.
    pub fn hide(&mut self) {
        self.deadline = None;
    }

    /// Whether the overlay is visible at `now`.
    #[must_use]
    pub fn visible(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// The pending hide deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
