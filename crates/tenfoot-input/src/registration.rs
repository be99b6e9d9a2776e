#![forbid(unsafe_code)]

//! Startup registration of platform input keys.
//!
//! Media and colored function keys are not delivered to the application
//! unless registered with the TV input subsystem first. Registration runs
//! once at startup; a key that fails to register is logged and skipped so a
//! firmware quirk never blocks launch.
//!
//! Most of these keys have no mapping in the navigation dispatch table; they
//! are registered so the platform routes them to the application at all, and
//! the router ignores them until a binding exists.

use std::fmt;

/// Keys requested from the platform input subsystem at startup.
pub const STARTUP_KEYS: [&str; 13] = [
    "MediaPlay",
    "MediaPause",
    "MediaStop",
    "MediaTrackPrevious",
    "MediaTrackNext",
    "MediaRewind",
    "MediaFastForward",
    "ColorF0Red",
    "ColorF1Green",
    "ColorF2Yellow",
    "ColorF3Blue",
    "Return",
    "Exit",
];

/// Capability for registering keys with the platform input subsystem.
pub trait KeyRegistrar {
    /// Request delivery of the named key.
    fn register_key(&mut self, name: &str) -> Result<(), RegistrationError>;
}

/// A single key registration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationError {
    /// Platform key name that failed to register.
    pub key: String,
    /// Platform-reported reason.
    pub reason: String,
}

impl RegistrationError {
    /// Create a registration error.
    #[must_use]
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to register key {:?}: {}", self.key, self.reason)
    }
}

impl std::error::Error for RegistrationError {}

/// Register the full startup key table.
///
/// Individual failures are collected and returned; they are never fatal.
pub fn register_startup_keys<R: KeyRegistrar + ?Sized>(
    registrar: &mut R,
) -> Vec<RegistrationError> {
    let mut failures = Vec::new();
    for key in STARTUP_KEYS {
        if let Err(err) = registrar.register_key(key) {
            #[cfg(feature = "tracing")]
            tracing::warn!(key = err.key.as_str(), reason = err.reason.as_str(), "key registration failed");
            failures.push(err);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, "registered key");
        }
    }
    failures
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
