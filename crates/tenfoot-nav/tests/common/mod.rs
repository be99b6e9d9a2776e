//! Shared test doubles for navigation integration tests.
#![allow(dead_code)] // not every test binary uses every double

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use tenfoot_nav::{Activation, FocusId, FocusSurface, Mode, PlaybackIntent, PlaybackSink, RouteHistory};

/// In-memory stand-in for the rendered view tree.
#[derive(Debug, Default)]
pub struct PageSurface {
    pub sidebar: Vec<FocusId>,
    pub content: Vec<FocusId>,
    pub popup: Vec<FocusId>,
    pub player: Vec<FocusId>,
    pub search_ids: Vec<FocusId>,
    pub text_entry: bool,
    pub highlighted: BTreeSet<FocusId>,
    pub focused: Option<FocusId>,
    pub activated: Vec<FocusId>,
}

impl FocusSurface for PageSurface {
    fn focusables(&self, mode: Mode) -> Vec<FocusId> {
        match mode {
            Mode::Sidebar => self.sidebar.clone(),
            Mode::Content => self.content.clone(),
            Mode::Popup => self.popup.clone(),
            Mode::Player => self.player.clone(),
        }
    }

    fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    fn highlight(&mut self, id: FocusId) {
        self.highlighted.insert(id);
    }

    fn grab_focus(&mut self, id: FocusId) {
        self.focused = Some(id);
    }

    fn activate(&mut self, id: FocusId) -> Option<Activation> {
        self.activated.push(id);
        if self.search_ids.contains(&id) {
            Some(Activation::Search)
        } else {
            Some(Activation::Item)
        }
    }

    fn text_entry_active(&self) -> bool {
        self.text_entry
    }
}

/// Route-history double counting pops.
#[derive(Debug, Default)]
pub struct PopCounter {
    pub pops: usize,
}

impl RouteHistory for PopCounter {
    fn pop(&mut self) {
        self.pops += 1;
    }
}

/// Playback sink recording every delivered intent.
#[derive(Default)]
pub struct IntentLog {
    pub intents: Rc<RefCell<Vec<PlaybackIntent>>>,
}

impl PlaybackSink for IntentLog {
    fn apply(&mut self, intent: PlaybackIntent) {
        self.intents.borrow_mut().push(intent);
    }
}
