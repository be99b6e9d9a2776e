#![forbid(unsafe_code)]

//! Native shell facade.
//!
//! The platform shell supplies app metadata, the panel class, the base
//! display resolution, and the exit call. [`AppHost`] is the app-facing
//! view over a [`ShellBridge`] capability; effective screen size is the
//! base resolution scaled by the panel class.

use crate::kv::KeyValueStore;
use crate::state::ClientState;

/// Panel capability class, as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PanelClass {
    /// Full-HD or below.
    #[default]
    Standard,
    /// 4K UHD panel.
    Uhd4k,
    /// 8K UHD panel.
    Uhd8k,
}

impl PanelClass {
    /// Pixel-ratio multiplier applied to the reported base resolution.
    #[must_use]
    pub const fn scale(self) -> u32 {
        match self {
            Self::Standard => 1,
            Self::Uhd4k => 2,
            Self::Uhd8k => 4,
        }
    }
}

/// Effective display resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
}

impl ScreenInfo {
    /// Scale a base resolution by the panel class multiplier.
    #[must_use]
    pub const fn scaled(self, panel: PanelClass) -> Self {
        Self {
            width: self.width * panel.scale(),
            height: self.height * panel.scale(),
        }
    }
}

/// Media capabilities advertised to the streaming backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Whether MKV containers may be played progressively.
    pub mkv_progressive: bool,
    /// Whether SSA/ASS subtitles are rendered on-device.
    pub ssa_render: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        // The TV media pipeline cannot seek progressive MKV but does
        // render SSA natively.
        Self {
            mkv_progressive: false,
            ssa_render: true,
        }
    }
}

/// Capabilities advertised for offline sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncProfile {
    /// Whether MKV containers may be transferred progressively.
    pub mkv_progressive: bool,
}

/// Capability over the platform shell.
pub trait ShellBridge {
    /// Installed application name.
    fn app_name(&self) -> String;

    /// Installed application version.
    fn app_version(&self) -> String;

    /// Marketing device name (e.g. the TV model string).
    fn device_name(&self) -> String;

    /// Panel class reported by product info.
    fn panel_class(&self) -> PanelClass;

    /// Base display resolution before panel scaling.
    fn base_resolution(&self) -> ScreenInfo;

    /// Current wall-clock time as unix milliseconds.
    fn now_unix_millis(&self) -> u64;

    /// Terminate the application.
    fn exit(&mut self);
}

/// App-facing view over the shell and the persisted device identity.
#[derive(Debug)]
pub struct AppHost<B: ShellBridge, S: KeyValueStore> {
    bridge: B,
    state: ClientState<S>,
}

impl<B: ShellBridge, S: KeyValueStore> AppHost<B, S> {
    /// Build the host and log the app identity, like shell init does.
    pub fn init(bridge: B, state: ClientState<S>) -> Self {
        let host = Self { bridge, state };
        tracing::info!(
            app = %host.bridge.app_name(),
            version = %host.bridge.app_version(),
            device = %host.bridge.device_name(),
            "shell host initialized"
        );
        host
    }

    #[must_use]
    pub fn app_name(&self) -> String {
        self.bridge.app_name()
    }

    #[must_use]
    pub fn app_version(&self) -> String {
        self.bridge.app_version()
    }

    #[must_use]
    pub fn device_name(&self) -> String {
        self.bridge.device_name()
    }

    /// The persisted device identifier, minting one on first call.
    pub fn device_id(&mut self) -> String {
        let name = self.bridge.device_name();
        let now = self.bridge.now_unix_millis();
        self.state.device_id(&name, now)
    }

    /// Layout hint for the web app shell. TVs always use the `tv` layout.
    #[must_use]
    pub fn default_layout(&self) -> &'static str {
        "tv"
    }

    #[must_use]
    pub fn device_profile(&self) -> DeviceProfile {
        DeviceProfile::default()
    }

    #[must_use]
    pub fn sync_profile(&self) -> SyncProfile {
        SyncProfile::default()
    }

    /// Effective screen resolution, panel-scaled.
    #[must_use]
    pub fn screen(&self) -> ScreenInfo {
        self.bridge
            .base_resolution()
            .scaled(self.bridge.panel_class())
    }

    /// Persisted state accessor.
    pub fn state(&mut self) -> &mut ClientState<S> {
        &mut self.state
    }

    /// Terminate the application via the shell.
    pub fn exit(&mut self) {
        tracing::info!("shell exit requested");
        self.bridge.exit();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
