#![forbid(unsafe_code)]

//! The single global key router.
//!
//! All directional input flows through [`KeyRouter::handle`]. Dispatch is a
//! pure function of `(mode, key)` producing at most one of: a focus move
//! (clamped, no wraparound), a mode transition, or a playback intent. The
//! router is the only component that performs focus-index arithmetic.
//!
//! # Contract per event
//! 1. While a text-entry field owns platform focus, only the reserved
//!    navigation keys are intercepted; everything else passes through for
//!    native editing (including backspace).
//! 2. Every event that reaches mode dispatch is reported
//!    [`Disposition::Handled`] so the embedder suppresses default platform
//!    handling (page scroll, history navigation) even for keys with no
//!    binding.
//! 3. In player mode keys never move a focus index — they translate 1:1 into
//!    playback intents, and the back-action additionally pops route history.
//! 4. Mode transitions commit before the returned [`NavEffect`] is executed;
//!    the embedder re-renders and then calls
//!    [`reacquire_focus`](crate::surface::reacquire_focus).

use tenfoot_input::{KeyEvent, RemoteKey};

use crate::bridge::{PlaybackIntent, PlayerBridge, SEEK_BACK_SECS, SEEK_FORWARD_SECS};
use crate::mode::{Mode, NavEffect, NavState, NavTrigger};
use crate::surface::{Activation, FocusSurface, focus_to};

/// Whether the router consumed the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Consumed; the embedder must suppress default platform handling.
    Handled,
    /// Left for native handling (text-entry exception).
    PassedThrough,
}

/// Result of routing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOutcome {
    /// Whether default platform handling must be suppressed.
    pub disposition: Disposition,
    /// Side effect for the embedder to execute after the state commit.
    pub effect: NavEffect,
}

impl RouterOutcome {
    const fn handled(effect: NavEffect) -> Self {
        Self {
            disposition: Disposition::Handled,
            effect,
        }
    }

    const fn passed_through() -> Self {
        Self {
            disposition: Disposition::PassedThrough,
            effect: NavEffect::None,
        }
    }
}

/// Capability for leaving the player route (history pop).
pub trait RouteHistory {
    /// Navigate one step back in route history.
    fn pop(&mut self);
}

/// The single global key-event subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRouter;

impl KeyRouter {
    /// Create a router.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Route one key event.
    ///
    /// Reads and writes `state`, queries `surface` for the current mode's
    /// focus set, and in player mode emits intents through `bridge` and pops
    /// `history` on the back-action.
    pub fn handle<S, H>(
        &mut self,
        event: &KeyEvent,
        state: &mut NavState,
        surface: &mut S,
        bridge: &mut PlayerBridge,
        history: &mut H,
    ) -> RouterOutcome
    where
        S: FocusSurface + ?Sized,
        H: RouteHistory + ?Sized,
    {
        // Text-entry exception: let the field edit itself.
        if surface.text_entry_active() && !event.is_reserved_nav_key() {
            return RouterOutcome::passed_through();
        }

        let outcome = match state.current_mode() {
            Mode::Player => Self::route_player(event, bridge, history),
            mode => Self::route_focus_mode(mode, event, state, surface),
        };
        tracing::trace!(key = ?event.key, mode = ?state.current_mode(), ?outcome, "key routed");
        outcome
    }

    /// Player mode: keys become intents, never focus moves.
    fn route_player<H: RouteHistory + ?Sized>(
        event: &KeyEvent,
        bridge: &mut PlayerBridge,
        history: &mut H,
    ) -> RouterOutcome {
        // Any remote activity reveals the control overlay.
        bridge.send(PlaybackIntent::ShowControls);

        if event.is_back_action() {
            bridge.send(PlaybackIntent::Back);
            history.pop();
            return RouterOutcome::handled(NavEffect::None);
        }

        match event.key {
            RemoteKey::Right => bridge.send(PlaybackIntent::Seek(SEEK_FORWARD_SECS)),
            RemoteKey::Left => bridge.send(PlaybackIntent::Seek(SEEK_BACK_SECS)),
            RemoteKey::Enter => bridge.send(PlaybackIntent::PlayPause),
            _ => {}
        }
        RouterOutcome::handled(NavEffect::None)
    }

    /// Sidebar, content, and popup modes: focus arithmetic and transitions.
    fn route_focus_mode<S: FocusSurface + ?Sized>(
        mode: Mode,
        event: &KeyEvent,
        state: &mut NavState,
        surface: &mut S,
    ) -> RouterOutcome {
        if event.is_back_action() {
            return RouterOutcome::handled(state.dispatch(NavTrigger::Back));
        }

        match event.key {
            RemoteKey::Right => Self::move_focus(state, surface, 1),
            RemoteKey::Left => Self::move_focus(state, surface, -1),
            RemoteKey::Down => {
                if let Some(columns) = mode.columns() {
                    Self::move_focus(state, surface, columns as isize);
                }
            }
            RemoteKey::Up => {
                if let Some(columns) = mode.columns() {
                    Self::move_focus(state, surface, -(columns as isize));
                }
            }
            RemoteKey::Enter => {
                return RouterOutcome::handled(Self::activate(mode, state, surface));
            }
            // The red function key doubles as confirm in the sidebar.
            RemoteKey::ColorRed if mode == Mode::Sidebar => {
                return RouterOutcome::handled(Self::activate(mode, state, surface));
            }
            _ => {}
        }
        RouterOutcome::handled(NavEffect::None)
    }

    /// Move the cursor by `delta` within the current mode's focus set.
    ///
    /// Clamps at both ends; no cyclic wraparound.
    fn move_focus<S: FocusSurface + ?Sized>(state: &mut NavState, surface: &mut S, delta: isize) {
        let handles = surface.focusables(state.current_mode());
        let target = state.focus_index() as isize + delta;
        let index = focus_to(surface, &handles, target);
        state.set_focus_index(index);
    }

    /// Activate the focused element. No-op on an empty focus set.
    fn activate<S: FocusSurface + ?Sized>(
        mode: Mode,
        state: &mut NavState,
        surface: &mut S,
    ) -> NavEffect {
        let handles = surface.focusables(mode);
        let Some(&id) = handles.get(state.focus_index()) else {
            return NavEffect::None;
        };
        match surface.activate(id) {
            Some(Activation::Search) if mode == Mode::Sidebar => {
                state.dispatch(NavTrigger::ActivateSearch)
            }
            Some(Activation::Item) if mode == Mode::Sidebar => {
                state.dispatch(NavTrigger::ActivateItem)
            }
            // Content and popup activations act in place (the clicked element
            // navigates or submits by itself); no mode transition here.
            Some(_) => NavEffect::None,
            None => NavEffect::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
