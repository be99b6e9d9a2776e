#![forbid(unsafe_code)]

//! The focus surface capability and clamped focus application.
//!
//! The rendered view tree is a live, order-dependent data source: the focus
//! set is recomputed from it on every navigation key event and on every
//! mode/route change, never cached. An index into a focus set is only
//! meaningful for the set scanned for the *current* mode at the *current*
//! route; [`reacquire_focus`] re-clamps stale indices before use.
//!
//! # Invariants
//! 1. [`focus_to`] never panics on an empty set: it returns `0` and touches
//!    nothing.
//! 2. At most one element is highlighted after any [`focus_to`] call
//!    (highlighting is cleared globally first).
//! 3. [`focus_to`] is idempotent: repeating a call with the same arguments
//!    yields the same visible state and the same index.

use crate::mode::{Mode, NavState};

/// Opaque handle to an on-screen interactive element.
pub type FocusId = u64;

/// What an activated element turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A regular item (navigates or acts in place).
    Item,
    /// The search affordance; opens the search dialog.
    Search,
}

/// Capability over the rendered view tree.
///
/// Implementations back this with whatever UI framework renders the client;
/// the contract is that [`focusables`](Self::focusables) returns elements
/// tagged with the mode's marker attribute ([`Mode::marker`], e.g.
/// `sidebar-focusable`) in document order, and document order defines
/// navigation adjacency.
pub trait FocusSurface {
    /// Every interactive element currently rendered for `mode`, in document
    /// order.
    fn focusables(&self, mode: Mode) -> Vec<FocusId>;

    /// Remove the highlighting marker from every element, regardless of
    /// which (possibly stale) focus set applied it.
    fn clear_highlights(&mut self);

    /// Apply the highlighting marker to one element.
    fn highlight(&mut self, id: FocusId);

    /// Give the element platform focus.
    fn grab_focus(&mut self, id: FocusId);

    /// Activate (click) an element. `None` if the element is gone.
    fn activate(&mut self, id: FocusId) -> Option<Activation>;

    /// Whether a text-entry field currently owns platform focus.
    fn text_entry_active(&self) -> bool;
}

/// Focus the element at `index` within `handles`, clamping into range.
///
/// Empty set: returns `0` without touching the surface. Otherwise clamps
/// `index` into `[0, len-1]`, clears all highlighting, highlights and
/// focuses the element at the clamped index, and returns that index so the
/// caller can persist it as the new cursor.
pub fn focus_to<S: FocusSurface + ?Sized>(surface: &mut S, handles: &[FocusId], index: isize) -> usize {
    if handles.is_empty() {
        return 0;
    }
    let clamped = index.clamp(0, handles.len() as isize - 1) as usize;
    surface.clear_highlights();
    surface.highlight(handles[clamped]);
    surface.grab_focus(handles[clamped]);
    clamped
}

/// Re-acquire focus after a mode or route change.
///
/// Clears stale highlighting globally, rescans the surface for the current
/// mode, re-clamps the stored cursor against the fresh set, and stores the
/// clamped value back. Callers must invoke this only after the view tree
/// reflects the committed state (see the crate-level ordering contract).
pub fn reacquire_focus<S: FocusSurface + ?Sized>(surface: &mut S, state: &mut NavState) {
    surface.clear_highlights();
    let handles = surface.focusables(state.current_mode());
    let index = focus_to(surface, &handles, state.focus_index() as isize);
    state.set_focus_index(index);
    tracing::trace!(mode = ?state.current_mode(), index, len = handles.len(), "focus reacquired");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
