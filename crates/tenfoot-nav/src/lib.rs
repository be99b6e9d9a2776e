#![forbid(unsafe_code)]

//! Navigation core: the focus/mode state machine for a remote-controlled
//! ("ten-foot") video client.
//!
//! # Role in tenfoot
//! One global key router owns all directional input. It reads and writes a
//! single [`NavState`] (the active [`Mode`] plus focus cursor), queries the
//! embedder's [`FocusSurface`] for the current mode's focusable elements,
//! applies one transition, and performs one focus application — plus, in
//! player mode, one [`PlaybackIntent`] dispatch through the
//! [`PlayerBridge`].
//!
//! # Primary responsibilities
//! - **NavState**: the four-mode finite state machine (sidebar, content,
//!   popup, player) with its transition table.
//! - **FocusSurface / focus_to**: live focus-set scanning and clamped,
//!   idempotent focus application.
//! - **KeyRouter**: the single dispatch point from key events to focus
//!   moves, mode transitions, and playback intents.
//! - **PlayerBridge**: the typed single-consumer channel into the playback
//!   session.
//!
//! # Ordering contract
//! [`NavState::dispatch`] completes (state committed, effect returned)
//! before any focus re-acquisition runs. Embedders execute the returned
//! [`NavEffect`], update their view tree, and only then call
//! [`reacquire_focus`] — so focus is always applied to the freshly rendered
//! element set, never a stale one.

pub mod bridge;
pub mod mode;
pub mod router;
pub mod surface;

pub use bridge::{PlaybackIntent, PlaybackSink, PlayerBridge, SEEK_BACK_SECS, SEEK_FORWARD_SECS};
pub use mode::{Mode, NavEffect, NavState, NavTrigger};
pub use router::{Disposition, KeyRouter, RouteHistory, RouterOutcome};
pub use surface::{Activation, FocusId, FocusSurface, focus_to, reacquire_focus};
