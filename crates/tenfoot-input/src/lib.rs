#![forbid(unsafe_code)]

//! Input layer: normalized remote-control key events and platform key
//! registration.
//!
//! # Role in tenfoot
//! `tenfoot-input` owns the vocabulary of the TV remote. The navigation
//! core (`tenfoot-nav`) consumes [`KeyEvent`] values and never looks at raw
//! platform key names or codes again.
//!
//! # Primary responsibilities
//! - **KeyEvent**: canonical keyboard/remote events with the raw code kept
//!   alongside the parsed key.
//! - **Back-action normalization**: the several physical "go back" sources
//!   (browser back, backspace, escape, the dedicated exit key, and the raw
//!   Samsung remote code) collapse into one logical predicate.
//! - **Key registration**: the startup table of media and colored function
//!   keys requested from the platform input subsystem.
//!
//! # How it fits in the system
//! The embedding shell translates platform keydown callbacks into
//! [`KeyEvent`] values and feeds them to the key router. Registration runs
//! once at startup; individual failures are tolerated and logged.

pub mod key;
pub mod registration;

#[cfg(feature = "tracing")]
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

pub use key::{KeyEvent, RemoteKey, TIZEN_BACK_CODE};
pub use registration::{KeyRegistrar, RegistrationError, STARTUP_KEYS, register_startup_keys};
