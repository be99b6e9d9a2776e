#![forbid(unsafe_code)]

//! Subtitle track selection.
//!
//! The stream resolver hands back zero or more text tracks; playback
//! prefers an English track and otherwise the first offered. Applying a
//! selection enables exactly one track on the media element and disables
//! the rest.

/// A subtitle track offered for the current video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    /// BCP-47-ish language tag as delivered by the resolver (e.g. `en`).
    pub lang: String,
    /// Human-readable label.
    pub label: String,
    /// Track source URL.
    pub url: String,
}

impl SubtitleTrack {
    /// Create a track.
    #[must_use]
    pub fn new(lang: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Pick the default track: `en` if offered, else the first.
#[must_use]
pub fn preferred_track(tracks: &[SubtitleTrack]) -> Option<&SubtitleTrack> {
    tracks.iter().find(|t| t.lang == "en").or_else(|| tracks.first())
}

/// Capability over the media element's text track list.
pub trait TextTrackSurface {
    /// Number of text tracks currently loaded.
    fn track_count(&self) -> usize;

    /// Whether the track at `index` matches the selection (by language or
    /// label).
    fn track_matches(&self, index: usize, track: &SubtitleTrack) -> bool;

    /// Show or disable the track at `index`.
    fn set_track_showing(&mut self, index: usize, showing: bool);
}

/// Enable the selected track and disable every other one.
pub fn apply_selection<S: TextTrackSurface + ?Sized>(surface: &mut S, selected: &SubtitleTrack) {
    for index in 0..surface.track_count() {
        let showing = surface.track_matches(index, selected);
        surface.set_track_showing(index, showing);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
