#![forbid(unsafe_code)]

//! Persisted client state and the native shell facade.
//!
//! # Role in tenfoot
//! `tenfoot-store` keeps the handful of values that survive an app restart
//! under their historical string keys, serialized as JSON, and wraps the
//! platform shell (app metadata, panel class, screen resolution, exit)
//! behind a capability trait.
//!
//! # Design rules
//! - Stored keys never change spelling; old installs must keep their data.
//! - A malformed stored value is never an error: reads fall back to fixed
//!   defaults and the corrupt value is overwritten on the next write.
//! - The backing store is a capability ([`KeyValueStore`]) so tests run
//!   against an in-memory map and production against a JSON file.

pub mod kv;
pub mod shell;
pub mod state;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use shell::{AppHost, DeviceProfile, PanelClass, ScreenInfo, ShellBridge, SyncProfile};
pub use state::{ClientState, UserSettings, VideoDescriptor, keys};
