#![forbid(unsafe_code)]

//! Playback session: the consumer side of the player bridge.
//!
//! # Role in tenfoot
//! `tenfoot-player` owns everything between a [`PlaybackIntent`] arriving
//! and the media element changing: seek clamping, play/pause toggling, the
//! control-overlay inactivity timer, adaptive-stream engine lifecycle, and
//! subtitle track selection. The media element and the stream engines
//! themselves are capabilities supplied by the embedder.
//!
//! # Primary responsibilities
//! - **PlayerSession**: applies intents idempotently and synchronously.
//! - **ControlsTimer**: ten-second inactivity deadline for the overlay,
//!   cancel-and-reschedule.
//! - **StreamBinding**: attach/teardown of HLS/DASH/progressive engines;
//!   the previous engine is always detached before a new source attaches.
//! - **Subtitles**: preferred-track selection and exclusive activation.
//!
//! [`PlaybackIntent`]: tenfoot_nav::PlaybackIntent

pub mod controls;
pub mod session;
pub mod stream;
pub mod subtitle;

pub use controls::{CONTROLS_HIDE_AFTER, ControlsTimer};
pub use session::{MediaSurface, PlayerSession};
pub use stream::{EngineError, StreamBinding, StreamEngine, StreamKind};
pub use subtitle::{SubtitleTrack, TextTrackSurface, apply_selection, preferred_track};
