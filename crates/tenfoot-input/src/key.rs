#![forbid(unsafe_code)]

//! Normalized remote-control key events.
//!
//! [`RemoteKey`] is parsed from DOM-style key names as delivered by the TV
//! browser shell; [`KeyEvent`] pairs the parsed key with the raw key code so
//! firmware that reports the back key only as a numeric code (see
//! [`TIZEN_BACK_CODE`]) is still recognized.
//!
//! # Invariants
//! 1. Parsing is total: unknown names map to [`RemoteKey::Unidentified`],
//!    never an error.
//! 2. [`KeyEvent::is_back_action`] is the *only* definition of the logical
//!    back-action; no other module re-derives it from names or codes.
//! 3. The reserved navigation keys (left/right/up/down/tab/enter) are the
//!    exact set that bypasses the text-entry exception in the router.

/// Raw key code emitted for the back key by Samsung TV remotes.
///
/// Some firmware delivers no usable key name for this button, only the code.
pub const TIZEN_BACK_CODE: u32 = 10009;

/// A key on the TV remote (or an attached keyboard), parsed from the
/// platform key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Tab,
    Backspace,
    Escape,
    /// Browser-level back navigation key.
    BrowserBack,
    /// Dedicated exit key on the remote.
    Exit,
    /// The remote's "Return" key (registered at startup, distinct from Enter).
    Return,
    MediaPlay,
    MediaPause,
    MediaStop,
    MediaTrackPrevious,
    MediaTrackNext,
    MediaRewind,
    MediaFastForward,
    /// Colored function key F0 (red). Doubles as a confirm key.
    ColorRed,
    /// Colored function key F1 (green).
    ColorGreen,
    /// Colored function key F2 (yellow).
    ColorYellow,
    /// Colored function key F3 (blue).
    ColorBlue,
    /// A printable character (text entry on keyboard-equipped remotes).
    Char(char),
    /// Any key name this layer does not model.
    Unidentified,
}

impl RemoteKey {
    /// Parse a platform key name.
    ///
    /// Names follow the DOM `KeyboardEvent.key` convention plus the Samsung
    /// extensions (`Exit`, `ColorF0Red`, ...). Single-character names become
    /// [`RemoteKey::Char`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            "Escape" => Self::Escape,
            "BrowserBack" => Self::BrowserBack,
            "Exit" => Self::Exit,
            "Return" => Self::Return,
            "MediaPlay" => Self::MediaPlay,
            "MediaPause" => Self::MediaPause,
            "MediaStop" => Self::MediaStop,
            "MediaTrackPrevious" => Self::MediaTrackPrevious,
            "MediaTrackNext" => Self::MediaTrackNext,
            "MediaRewind" => Self::MediaRewind,
            "MediaFastForward" => Self::MediaFastForward,
            "ColorF0Red" => Self::ColorRed,
            "ColorF1Green" => Self::ColorGreen,
            "ColorF2Yellow" => Self::ColorYellow,
            "ColorF3Blue" => Self::ColorBlue,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Unidentified,
                }
            }
        }
    }

    /// Returns true for the four directional keys.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
    }

    /// Returns true for media transport keys.
    #[must_use]
    pub const fn is_media(self) -> bool {
        matches!(
            self,
            Self::MediaPlay
                | Self::MediaPause
                | Self::MediaStop
                | Self::MediaTrackPrevious
                | Self::MediaTrackNext
                | Self::MediaRewind
                | Self::MediaFastForward
        )
    }

    /// Returns true for the colored function keys.
    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::ColorRed | Self::ColorGreen | Self::ColorYellow | Self::ColorBlue
        )
    }
}

/// A single key event as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Parsed key.
    pub key: RemoteKey,
    /// Raw platform key code (0 when the shell does not supply one).
    pub code: u32,
}

impl KeyEvent {
    /// Create an event from an already-parsed key.
    #[must_use]
    pub const fn new(key: RemoteKey, code: u32) -> Self {
        Self { key, code }
    }

    /// Create an event from a platform key name and code.
    #[must_use]
    pub fn named(name: &str, code: u32) -> Self {
        Self {
            key: RemoteKey::from_name(name),
            code,
        }
    }

    /// The logical back-action: browser-back, backspace, escape, the
    /// dedicated exit key, or the raw Samsung remote code.
    #[must_use]
    pub const fn is_back_action(&self) -> bool {
        self.code == TIZEN_BACK_CODE
            || matches!(
                self.key,
                RemoteKey::BrowserBack | RemoteKey::Backspace | RemoteKey::Escape | RemoteKey::Exit
            )
    }

    /// The reserved navigation keys that stay active while a text-entry
    /// field owns platform focus.
    #[must_use]
    pub const fn is_reserved_nav_key(&self) -> bool {
        matches!(
            self.key,
            RemoteKey::Left
                | RemoteKey::Right
                | RemoteKey::Up
                | RemoteKey::Down
                | RemoteKey::Tab
                | RemoteKey::Enter
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
