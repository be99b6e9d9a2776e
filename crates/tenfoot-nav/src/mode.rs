#![forbid(unsafe_code)]

//! The navigation mode state machine.
//!
//! Exactly one [`Mode`] is active at any time. Transitions are a total
//! function of `(mode, trigger)`: every unhandled pair is a no-op, so the
//! machine can never reach an undefined state. A single global mode avoids
//! conflicting simultaneous focus regions — on a ten-foot interface only one
//! focus ring may be visible at a time.
//!
//! # Invariants
//! 1. `focus_index` and `last_sidebar_index` only change through
//!    [`NavState::dispatch`] and [`NavState::set_focus_index`] (the router
//!    and focus re-acquisition are the only callers of the latter).
//! 2. `exit_prompt_visible` is true only between the sidebar back-action and
//!    the popup back-action (or exit confirmation) that resolves it.
//! 3. `dispatch` commits all state before returning; the returned
//!    [`NavEffect`] is executed by the embedder strictly afterwards.

/// The single active navigation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Horizontal row of top-level destinations.
    Sidebar,
    /// The browsing grid (catalog, search results, categories).
    Content,
    /// A modal dialog: either the search dialog or the exit prompt.
    Popup,
    /// Fullscreen playback; keys become playback intents.
    Player,
}

impl Mode {
    /// All four modes.
    pub const ALL: [Mode; 4] = [Mode::Sidebar, Mode::Content, Mode::Popup, Mode::Player];

    /// Grid column count for vertical movement.
    ///
    /// `None` means up/down do not move focus in this mode: the sidebar is a
    /// single row, and player mode has no focus set at all.
    #[must_use]
    pub const fn columns(self) -> Option<usize> {
        match self {
            Mode::Content => Some(5),
            Mode::Popup => Some(1),
            Mode::Sidebar | Mode::Player => None,
        }
    }

    /// The marker attribute that tags an element as focusable in this mode.
    ///
    /// Document order of elements carrying the marker defines navigation
    /// adjacency.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Mode::Sidebar => "sidebar-focusable",
            Mode::Content => "content-focusable",
            Mode::Popup => "popup-focusable",
            Mode::Player => "player-focusable",
        }
    }
}

/// Abstract transition triggers, independent of literal key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTrigger {
    /// The focused sidebar element was activated and it is a regular item.
    ActivateItem,
    /// The focused sidebar element was activated and it opens search.
    ActivateSearch,
    /// The logical back-action (any physical back source).
    Back,
    /// The search dialog was closed by its own UI.
    DialogClosed,
    /// The exit prompt was confirmed; the application will close.
    ExitConfirmed,
    /// The route resolved to the player view.
    EnterPlayerRoute,
    /// The player view unmounted.
    LeavePlayerRoute,
}

/// Side effect requested by a transition, executed by the embedder after
/// the state commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Nothing beyond the state change itself.
    None,
    /// Focus moved to index 0 of the new mode's set; re-render then rescan.
    ResetFocus,
    /// Focus restored to a remembered index; re-render then rescan.
    RestoreFocus(usize),
    /// Open the search dialog.
    OpenSearch,
    /// Show the exit confirmation prompt.
    ShowExitPrompt,
    /// Hide the exit confirmation prompt.
    HideExitPrompt,
    /// Terminal: close the application.
    CloseApp,
}

/// Process-wide navigation state.
///
/// Owned by the top-level view and passed by reference into the router and
/// the focus re-acquisition path; no other component writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    mode: Mode,
    focus_index: usize,
    last_sidebar_index: usize,
    exit_prompt_visible: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Initial state at application start: sidebar mode, cursor at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: Mode::Sidebar,
            focus_index: 0,
            last_sidebar_index: 0,
            exit_prompt_visible: false,
        }
    }

    /// The active mode.
    #[inline]
    #[must_use]
    pub const fn current_mode(&self) -> Mode {
        self.mode
    }

    /// Cursor into the active mode's focus set.
    #[inline]
    #[must_use]
    pub const fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Remembered sidebar position, restored by the content back-action.
    #[inline]
    #[must_use]
    pub const fn last_sidebar_index(&self) -> usize {
        self.last_sidebar_index
    }

    /// Whether the exit confirmation prompt is currently displayed.
    #[inline]
    #[must_use]
    pub const fn exit_prompt_visible(&self) -> bool {
        self.exit_prompt_visible
    }

    /// Store a clamped cursor position.
    ///
    /// Callers: the key router (focus arithmetic) and [`reacquire_focus`]
    /// (re-clamping after a rescan). Nothing else writes the cursor.
    ///
    /// [`reacquire_focus`]: crate::surface::reacquire_focus
    pub fn set_focus_index(&mut self, index: usize) {
        self.focus_index = index;
    }

    /// Apply a trigger to the state machine.
    ///
    /// Total: unhandled `(mode, trigger)` pairs leave the state untouched
    /// and return [`NavEffect::None`]. All state is committed before the
    /// effect is returned.
    pub fn dispatch(&mut self, trigger: NavTrigger) -> NavEffect {
        let effect = match (self.mode, trigger) {
            (Mode::Sidebar, NavTrigger::ActivateItem) => {
                self.last_sidebar_index = self.focus_index;
                self.mode = Mode::Content;
                self.focus_index = 0;
                NavEffect::ResetFocus
            }
            (Mode::Sidebar, NavTrigger::ActivateSearch) => {
                self.mode = Mode::Popup;
                NavEffect::OpenSearch
            }
            (Mode::Sidebar, NavTrigger::Back) => {
                self.mode = Mode::Popup;
                self.exit_prompt_visible = true;
                NavEffect::ShowExitPrompt
            }
            (Mode::Content, NavTrigger::Back) => {
                self.mode = Mode::Sidebar;
                self.focus_index = self.last_sidebar_index;
                self.last_sidebar_index = 0;
                NavEffect::RestoreFocus(self.focus_index)
            }
            (Mode::Popup, NavTrigger::Back) => {
                self.mode = Mode::Sidebar;
                self.exit_prompt_visible = false;
                NavEffect::HideExitPrompt
            }
            (Mode::Popup, NavTrigger::DialogClosed) => {
                self.mode = Mode::Content;
                NavEffect::None
            }
            (Mode::Popup, NavTrigger::ExitConfirmed) => NavEffect::CloseApp,
            (_, NavTrigger::EnterPlayerRoute) => {
                self.mode = Mode::Player;
                NavEffect::None
            }
            (Mode::Player, NavTrigger::LeavePlayerRoute) => {
                self.mode = Mode::Content;
                NavEffect::None
            }
            _ => NavEffect::None,
        };

        tracing::debug!(mode = ?self.mode, ?trigger, ?effect, "nav transition");
        effect
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // === Mode geometry ===

    #[test]
    fn column_counts_per_mode() {
        assert_eq!(Mode::Content.columns(), Some(5));
        assert_eq!(Mode::Popup.columns(), Some(1));
        assert_eq!(Mode::Sidebar.columns(), None);
        assert_eq!(Mode::Player.columns(), None);
    }

    #[test]
    fn marker_attributes_are_mode_specific() {
        assert_eq!(Mode::Sidebar.marker(), "sidebar-focusable");
        assert_eq!(Mode::Player.marker(), "player-focusable");
        let mut seen = std::collections::HashSet::new();
        for mode in Mode::ALL {
            assert!(seen.insert(mode.marker()));
        }
    }

    // === Initial state ===

    #[test]
    fn initial_state() {
        let state = NavState::new();
        assert_eq!(state.current_mode(), Mode::Sidebar);
        assert_eq!(state.focus_index(), 0);
        assert_eq!(state.last_sidebar_index(), 0);
        assert!(!state.exit_prompt_visible());
    }

    // === Transition table ===

    #[test]
    fn sidebar_activate_item_enters_content_and_resets_focus() {
        let mut state = NavState::new();
        state.set_focus_index(3);
        let effect = state.dispatch(NavTrigger::ActivateItem);
        assert_eq!(effect, NavEffect::ResetFocus);
        assert_eq!(state.current_mode(), Mode::Content);
        assert_eq!(state.focus_index(), 0);
        assert_eq!(state.last_sidebar_index(), 3);
    }

    #[test]
    fn sidebar_activate_search_opens_popup() {
        let mut state = NavState::new();
        let effect = state.dispatch(NavTrigger::ActivateSearch);
        assert_eq!(effect, NavEffect::OpenSearch);
        assert_eq!(state.current_mode(), Mode::Popup);
    }

    #[test]
    fn sidebar_back_shows_exit_prompt() {
        let mut state = NavState::new();
        let effect = state.dispatch(NavTrigger::Back);
        assert_eq!(effect, NavEffect::ShowExitPrompt);
        assert_eq!(state.current_mode(), Mode::Popup);
        assert!(state.exit_prompt_visible());
    }

    #[test]
    fn content_back_restores_sidebar_index() {
        let mut state = NavState::new();
        state.set_focus_index(2);
        state.dispatch(NavTrigger::ActivateItem); // remembers index 2
        let effect = state.dispatch(NavTrigger::Back);
        assert_eq!(effect, NavEffect::RestoreFocus(2));
        assert_eq!(state.current_mode(), Mode::Sidebar);
        assert_eq!(state.focus_index(), 2);
        assert_eq!(state.last_sidebar_index(), 0);
    }

    #[test]
    fn popup_back_returns_to_sidebar_and_hides_prompt() {
        let mut state = NavState::new();
        state.dispatch(NavTrigger::Back); // sidebar -> popup, prompt shown
        let effect = state.dispatch(NavTrigger::Back);
        assert_eq!(effect, NavEffect::HideExitPrompt);
        assert_eq!(state.current_mode(), Mode::Sidebar);
        assert!(!state.exit_prompt_visible());
    }

    #[test]
    fn popup_dialog_closed_returns_to_content() {
        let mut state = NavState::new();
        state.dispatch(NavTrigger::ActivateSearch);
        let effect = state.dispatch(NavTrigger::DialogClosed);
        assert_eq!(effect, NavEffect::None);
        assert_eq!(state.current_mode(), Mode::Content);
    }

    #[test]
    fn exit_confirmed_requests_close() {
        let mut state = NavState::new();
        state.dispatch(NavTrigger::Back);
        assert_eq!(state.dispatch(NavTrigger::ExitConfirmed), NavEffect::CloseApp);
    }

    #[test]
    fn player_route_enters_from_any_mode() {
        for mode_setup in [
            NavTrigger::ActivateItem, // content
            NavTrigger::ActivateSearch, // popup
        ] {
            let mut state = NavState::new();
            state.dispatch(mode_setup);
            state.dispatch(NavTrigger::EnterPlayerRoute);
            assert_eq!(state.current_mode(), Mode::Player);
        }
        let mut state = NavState::new();
        state.dispatch(NavTrigger::EnterPlayerRoute);
        assert_eq!(state.current_mode(), Mode::Player);
    }

    #[test]
    fn leave_player_route_returns_to_content() {
        let mut state = NavState::new();
        state.dispatch(NavTrigger::EnterPlayerRoute);
        state.dispatch(NavTrigger::LeavePlayerRoute);
        assert_eq!(state.current_mode(), Mode::Content);
    }

    // === Totality and determinism ===

    #[test]
    fn unhandled_triggers_are_no_ops() {
        // Content mode does not react to activation or dialog triggers.
        let mut state = NavState::new();
        state.dispatch(NavTrigger::ActivateItem);
        let before = state.clone();
        for trigger in [
            NavTrigger::ActivateItem,
            NavTrigger::ActivateSearch,
            NavTrigger::DialogClosed,
            NavTrigger::ExitConfirmed,
            NavTrigger::LeavePlayerRoute,
        ] {
            assert_eq!(state.dispatch(trigger), NavEffect::None, "{trigger:?}");
            assert_eq!(state, before, "{trigger:?} must not mutate state");
        }
    }

    #[test]
    fn transitions_are_deterministic() {
        const TRIGGERS: [NavTrigger; 7] = [
            NavTrigger::ActivateItem,
            NavTrigger::ActivateSearch,
            NavTrigger::Back,
            NavTrigger::DialogClosed,
            NavTrigger::ExitConfirmed,
            NavTrigger::EnterPlayerRoute,
            NavTrigger::LeavePlayerRoute,
        ];
        // Reaching each mode from the initial state, every trigger yields the
        // same target mode on repeated application from identical states.
        for setup in [None, Some(NavTrigger::ActivateItem), Some(NavTrigger::ActivateSearch), Some(NavTrigger::EnterPlayerRoute)] {
            for trigger in TRIGGERS {
                let mut a = NavState::new();
                let mut b = NavState::new();
                if let Some(t) = setup {
                    a.dispatch(t);
                    b.dispatch(t);
                }
                assert_eq!(a.dispatch(trigger), b.dispatch(trigger));
                assert_eq!(a, b);
            }
        }
    }
}
