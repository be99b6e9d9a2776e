#![forbid(unsafe_code)]

//! The typed intent channel from navigation into playback.
//!
//! The router knows nothing about media APIs; the playback session knows
//! nothing about keys. [`PlayerBridge`] is the seam: a single-consumer
//! channel carrying [`PlaybackIntent`] values, applied synchronously on the
//! registered [`PlaybackSink`].
//!
//! # Invariants
//! 1. At most one sink is attached at a time (one mounted player session).
//! 2. `send` applies the intent synchronously on receipt — intents are never
//!    queued or batched, so no backlog can accumulate.
//! 3. With no sink attached, intents are dropped (logged at trace level);
//!    this is the normal state outside the player route.

use std::fmt;

/// Seek delta for the right directional key, in seconds.
pub const SEEK_FORWARD_SECS: i64 = 30;

/// Seek delta for the left directional key, in seconds.
pub const SEEK_BACK_SECS: i64 = -15;

/// An ephemeral playback command. Not retained state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIntent {
    /// Reveal the transient control overlay.
    ShowControls,
    /// Adjust the playback position by a signed number of seconds.
    Seek(i64),
    /// Toggle the paused state.
    PlayPause,
    /// Leaving playback; paired with a route-history pop by the router.
    Back,
}

/// Consumer side of the bridge: the mounted playback session.
///
/// Implementations must apply each intent idempotently and synchronously;
/// last-seek-wins is acceptable, silently skipping an intent is not.
pub trait PlaybackSink {
    /// Apply one intent.
    fn apply(&mut self, intent: PlaybackIntent);
}

/// Single-consumer notification channel from the router to playback.
#[derive(Default)]
pub struct PlayerBridge {
    sink: Option<Box<dyn PlaybackSink>>,
}

impl fmt::Debug for PlayerBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerBridge")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}

impl PlayerBridge {
    /// Create a bridge with no consumer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a playback session is currently attached.
    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Attach the playback session for a mounted player view.
    ///
    /// Replaces any previous sink; only one player session is ever mounted,
    /// so a replacement indicates the old view missed its detach.
    pub fn attach(&mut self, sink: Box<dyn PlaybackSink>) {
        if self.sink.is_some() {
            tracing::warn!("player bridge sink replaced while still attached");
        }
        self.sink = Some(sink);
    }

    /// Detach the playback session on unmount.
    pub fn detach(&mut self) -> Option<Box<dyn PlaybackSink>> {
        self.sink.take()
    }

    /// Deliver one intent to the attached sink, synchronously.
    pub fn send(&mut self, intent: PlaybackIntent) {
        match self.sink.as_mut() {
            Some(sink) => sink.apply(intent),
            None => tracing::trace!(?intent, "playback intent dropped, no sink attached"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
