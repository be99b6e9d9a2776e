#![forbid(unsafe_code)]

//! Typed accessors over the persisted client state.
//!
//! Every value lives under a stable string key carried over from earlier
//! releases; the keys must never be renamed or old installs lose their
//! data. Values are JSON except the device id and API override, which are
//! stored verbatim.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::kv::KeyValueStore;

/// Stable storage keys.
pub mod keys {
    /// Generated device identifier. The `2` suffix is historical.
    pub const DEVICE_ID: &str = "_deviceId2";
    /// JSON [`UserSettings`](super::UserSettings).
    pub const SETTINGS: &str = "settings";
    /// JSON [`VideoDescriptor`](super::VideoDescriptor) of the last opened video.
    pub const CURRENT_VIDEO: &str = "currentVideo";
    /// API base URL override, stored verbatim.
    pub const API_URL: &str = "apiUrl";
}

/// User-tunable settings persisted across sessions.
///
/// Unknown fields in stored JSON are ignored and missing fields take their
/// defaults, so settings written by older builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Content platform identifier sent to the API.
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Preferred content orientation filter, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            orientation: None,
        }
    }
}

fn default_platform() -> String {
    "default".to_string()
}

/// The last opened video, restored when entering the player route directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    /// Platform-scoped video id.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Resolved stream source, if already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Typed view over a [`KeyValueStore`].
///
/// Reads never fail: a missing or malformed value produces the default for
/// that key and a warning.
#[derive(Debug)]
pub struct ClientState<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ClientState<S> {
    /// Wrap a backing store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store, for flushing file-backed implementations.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the view and return the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    // --- settings ---

    /// Load settings; corrupt or absent values fall back to defaults.
    #[must_use]
    pub fn settings(&self) -> UserSettings {
        self.read_json(keys::SETTINGS).unwrap_or_default()
    }

    /// Persist settings.
    pub fn set_settings(&mut self, settings: &UserSettings) {
        self.write_json(keys::SETTINGS, settings);
    }

    // --- current video ---

    /// The last opened video, if a valid descriptor is stored.
    #[must_use]
    pub fn current_video(&self) -> Option<VideoDescriptor> {
        self.read_json(keys::CURRENT_VIDEO)
    }

    /// Remember `video` as the last opened one.
    pub fn set_current_video(&mut self, video: &VideoDescriptor) {
        self.write_json(keys::CURRENT_VIDEO, video);
    }

    /// Forget the last opened video.
    pub fn clear_current_video(&mut self) {
        self.store.remove(keys::CURRENT_VIDEO);
    }

    // --- API base override ---

    /// The configured API base URL, if overridden.
    #[must_use]
    pub fn api_url(&self) -> Option<String> {
        self.store.get(keys::API_URL).filter(|url| !url.is_empty())
    }

    /// Override the API base URL.
    pub fn set_api_url(&mut self, url: &str) {
        self.store.set(keys::API_URL, url);
    }

    // --- device id ---

    /// The persisted device identifier, generating and storing one on first
    /// use.
    ///
    /// The generated form is base64 of `"<device name>|<unix millis>"` with
    /// `=` padding replaced by `1`, matching ids minted by earlier releases.
    pub fn device_id(&mut self, device_name: &str, now_unix_millis: u64) -> String {
        if let Some(id) = self.store.get(keys::DEVICE_ID) {
            return id;
        }
        let id = STANDARD
            .encode(format!("{device_name}|{now_unix_millis}"))
            .replace('=', "1");
        tracing::info!(device_id = %id, "generated new device id");
        self.store.set(keys::DEVICE_ID, &id);
        id
    }

    // --- helpers ---

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed stored value");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize value"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn state() -> ClientState<MemoryStore> {
        ClientState::new(MemoryStore::new())
    }

    // === Settings ===

    #[test]
    fn settings_default_when_absent() {
        let state = state();
        assert_eq!(state.settings(), UserSettings::default());
        assert_eq!(state.settings().platform, "default");
    }

    #[test]
    fn settings_round_trip() {
        let mut state = state();
        let settings = UserSettings {
            platform: "alt".to_string(),
            orientation: Some("landscape".to_string()),
        };
        state.set_settings(&settings);
        assert_eq!(state.settings(), settings);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let mut state = state();
        state.store.set(keys::SETTINGS, "{broken");
        assert_eq!(state.settings(), UserSettings::default());
    }

    #[test]
    fn partial_settings_fill_missing_fields() {
        let mut state = state();
        state.store.set(keys::SETTINGS, r#"{"platform":"alt"}"#);
        let settings = state.settings();
        assert_eq!(settings.platform, "alt");
        assert_eq!(settings.orientation, None);
    }

    // === Current video ===

    #[test]
    fn current_video_round_trip_and_clear() {
        let mut state = state();
        assert_eq!(state.current_video(), None);

        let video = VideoDescriptor {
            id: "abc123".to_string(),
            title: "Some title".to_string(),
            source: Some("https://cdn/video.m3u8".to_string()),
            thumbnail: None,
        };
        state.set_current_video(&video);
        assert_eq!(state.current_video(), Some(video));

        state.clear_current_video();
        assert_eq!(state.current_video(), None);
    }

    #[test]
    fn corrupt_current_video_reads_as_none() {
        let mut state = state();
        state.store.set(keys::CURRENT_VIDEO, "null");
        assert_eq!(state.current_video(), None);
    }

    // === API URL ===

    #[test]
    fn api_url_override() {
        let mut state = state();
        assert_eq!(state.api_url(), None);
        state.set_api_url("https://example.test/api");
        assert_eq!(state.api_url(), Some("https://example.test/api".to_string()));
    }

    #[test]
    fn empty_api_url_reads_as_none() {
        let mut state = state();
        state.set_api_url("");
        assert_eq!(state.api_url(), None);
    }

    // === Device id ===

    #[test]
    fn device_id_is_generated_once_and_reused() {
        let mut state = state();
        let first = state.device_id("Living Room TV", 1_700_000_000_000);
        let second = state.device_id("Different Name", 1_800_000_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn device_id_contains_no_padding() {
        let mut state = state();
        // One-byte tail forces two padding chars in plain base64.
        let id = state.device_id("tv", 7);
        assert!(!id.contains('='));
        assert!(!id.is_empty());
    }

    #[test]
    fn device_id_encodes_name_and_timestamp() {
        let mut state = state();
        let id = state.device_id("tv", 1234);
        let expected = STANDARD.encode("tv|1234").replace('=', "1");
        assert_eq!(id, expected);
    }

    // === Restart round-trip ===

    #[test]
    fn identity_and_settings_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let settings = UserSettings {
            platform: "alt".to_string(),
            orientation: Some("landscape".to_string()),
        };

        // First launch: mint an id, persist settings, shut down.
        let mut state = ClientState::new(crate::kv::FileStore::open(&path).unwrap());
        let minted = state.device_id("Living Room TV", 1_700_000_000_000);
        state.set_settings(&settings);
        state.store().flush().unwrap();
        drop(state);

        // Second launch: everything reads back verbatim, and the device id
        // is reused even under a different name and clock.
        let mut state = ClientState::new(crate::kv::FileStore::open(&path).unwrap());
        assert_eq!(state.settings(), settings);
        assert_eq!(state.device_id("Renamed TV", 1_800_000_000_000), minted);
    }
}
