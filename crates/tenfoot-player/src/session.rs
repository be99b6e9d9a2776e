#![forbid(unsafe_code)]

//! The mounted playback session: consumer side of the player bridge.
//!
//! Exactly one session exists per mounted player view. Intents are applied
//! synchronously on receipt; nothing is queued, so a burst of keypresses
//! can never build a backlog.

use std::time::Instant;

use tenfoot_nav::{PlaybackIntent, PlaybackSink};

use crate::controls::ControlsTimer;
use crate::stream::{EngineError, StreamBinding, StreamEngine};

/// Capability over the platform media element.
pub trait MediaSurface {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Set the playback position in seconds.
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds; `0.0` while unknown.
    fn duration(&self) -> f64;

    /// Whether playback is paused.
    fn paused(&self) -> bool;

    /// Begin or resume playback.
    fn play(&mut self);

    /// Pause playback.
    fn pause(&mut self);
}

/// One mounted playback session.
#[derive(Debug)]
pub struct PlayerSession<M: MediaSurface> {
    media: M,
    controls: ControlsTimer,
    binding: StreamBinding,
    finished: bool,
}

impl<M: MediaSurface> PlayerSession<M> {
    /// Create a session around a media element, with no source bound yet.
    #[must_use]
    pub fn new(media: M) -> Self {
        Self {
            media,
            controls: ControlsTimer::new(),
            binding: StreamBinding::new(),
            finished: false,
        }
    }

    /// Bind the initial source.
    pub fn load(&mut self, engine: Box<dyn StreamEngine>, source: &str) -> Result<(), EngineError> {
        self.binding.rebind(engine, source)
    }

    /// Switch to another source (quality change), preserving the playback
    /// position and resuming.
    pub fn switch_source(
        &mut self,
        engine: Box<dyn StreamEngine>,
        source: &str,
    ) -> Result<(), EngineError> {
        let resume_at = self.media.current_time();
        self.binding.rebind(engine, source)?;
        self.media.set_current_time(resume_at);
        self.media.play();
        Ok(())
    }

    /// The wrapped media element.
    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Whether the session received the back intent and tore down.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether a stream source is currently bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Whether the control overlay is visible at `now`.
    #[must_use]
    pub fn controls_visible(&self, now: Instant) -> bool {
        self.controls.visible(now)
    }

    /// Apply one intent at an explicit instant (deterministic under test).
    pub fn apply_at(&mut self, intent: PlaybackIntent, now: Instant) {
        match intent {
            PlaybackIntent::ShowControls => self.controls.show(now),
            PlaybackIntent::Seek(delta) => {
                self.controls.show(now);
                let mut target = self.media.current_time() + delta as f64;
                if target < 0.0 {
                    target = 0.0;
                }
                let duration = self.media.duration();
                if duration > 0.0 && target > duration {
                    target = duration;
                }
                self.media.set_current_time(target);
            }
            PlaybackIntent::PlayPause => {
                self.controls.show(now);
                if self.media.paused() {
                    self.media.play();
                } else {
                    self.media.pause();
                }
            }
            PlaybackIntent::Back => {
                // Leaving playback: stop, free the engine, hide the overlay.
                self.media.pause();
                self.binding.release();
                self.controls.hide();
                self.finished = true;
            }
        }
    }
}

impl<M: MediaSurface> PlaybackSink for PlayerSession<M> {
    fn apply(&mut self, intent: PlaybackIntent) {
        self.apply_at(intent, Instant::now());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
