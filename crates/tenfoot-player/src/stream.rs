#![forbid(unsafe_code)]

//! Adaptive-stream engine lifecycle.
//!
//! HLS and DASH sources need an external engine attached to the media
//! element; progressive sources play directly. Engine instances hold
//! decoder and network resources, so exactly one may be attached at a time:
//! [`StreamBinding`] detaches the previous engine before attaching a new
//! source and on drop.
//!
//! # Invariants
//! 1. At most one engine is attached per binding.
//! 2. A failed attach leaves the binding empty (the failing engine is
//!    dropped, not retained half-attached).
//! 3. `release` is idempotent; drop releases.

use std::fmt;

/// Stream container classification, derived from the source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// HTTP Live Streaming playlist (`.m3u8`).
    Hls,
    /// MPEG-DASH manifest (`.mpd`).
    Dash,
    /// Anything else: handed to the media element directly.
    Progressive,
}

impl StreamKind {
    /// Classify a source URL by its path suffix (query/fragment ignored).
    #[must_use]
    pub fn classify(source: &str) -> Self {
        let path = source
            .split_once(['?', '#'])
            .map_or(source, |(path, _)| path);
        if path.ends_with(".m3u8") {
            Self::Hls
        } else if path.ends_with(".mpd") {
            Self::Dash
        } else {
            Self::Progressive
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hls => "hls",
            Self::Dash => "dash",
            Self::Progressive => "progressive",
        };
        f.write_str(name)
    }
}

/// Non-fatal engine failure: playback is unavailable, the app keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine cannot play this container kind.
    Unsupported(StreamKind),
    /// Attaching the source failed (parse error, network, codec).
    Attach {
        /// Source URL that failed.
        source: String,
        /// Engine-reported reason.
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(kind) => write!(f, "stream kind {kind} not supported by engine"),
            Self::Attach { source, reason } => {
                write!(f, "failed to attach source {source:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Capability over an external stream engine (hls.js/dash.js equivalents).
pub trait StreamEngine {
    /// Attach a source to the media element.
    fn attach(&mut self, source: &str) -> Result<(), EngineError>;

    /// Tear down decoder and network resources. Must be safe to call after
    /// a failed attach.
    fn detach(&mut self);
}

/// Owns the lifecycle of the currently attached engine, if any.
#[derive(Default)]
pub struct StreamBinding {
    engine: Option<Box<dyn StreamEngine>>,
    source: Option<String>,
}

impl fmt::Debug for StreamBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBinding")
            .field("bound", &self.engine.is_some())
            .field("source", &self.source)
            .finish()
    }
}

impl StreamBinding {
    /// Create an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an engine is currently attached.
    #[inline]
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.engine.is_some()
    }

    /// The currently attached source URL.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Attach `engine` to `source`, detaching any previous engine first.
    ///
    /// On failure the binding ends up empty and the error is returned;
    /// callers surface it as "unable to play", never as a crash.
    pub fn rebind(
        &mut self,
        mut engine: Box<dyn StreamEngine>,
        source: &str,
    ) -> Result<(), EngineError> {
        self.release();
        match engine.attach(source) {
            Ok(()) => {
                tracing::debug!(source, kind = %StreamKind::classify(source), "stream engine attached");
                self.engine = Some(engine);
                self.source = Some(source.to_string());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(source, error = %err, "stream engine attach failed");
                engine.detach();
                Err(err)
            }
        }
    }

    /// Detach and drop the current engine, if any.
    pub fn release(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.detach();
            tracing::debug!(source = self.source.as_deref(), "stream engine detached");
        }
        self.source = None;
    }
}

impl Drop for StreamBinding {
    fn drop(&mut self) {
        self.release();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct EngineLog {
        attaches: Vec<String>,
        detaches: usize,
    }

    struct FakeEngine {
        log: Rc<RefCell<EngineLog>>,
        fail: bool,
    }

    impl StreamEngine for FakeEngine {
        fn attach(&mut self, source: &str) -> Result<(), EngineError> {
            self.log.borrow_mut().attaches.push(source.to_string());
            if self.fail {
                Err(EngineError::Attach {
                    source: source.to_string(),
                    reason: "manifest parse error".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn detach(&mut self) {
            self.log.borrow_mut().detaches += 1;
        }
    }

    fn engine(log: &Rc<RefCell<EngineLog>>, fail: bool) -> Box<dyn StreamEngine> {
        Box::new(FakeEngine {
            log: Rc::clone(log),
            fail,
        })
    }

    // === Classification ===

    #[test]
    fn classifies_by_suffix() {
        assert_eq!(StreamKind::classify("https://cdn/x/master.m3u8"), StreamKind::Hls);
        assert_eq!(StreamKind::classify("https://cdn/x/manifest.mpd"), StreamKind::Dash);
        assert_eq!(StreamKind::classify("https://cdn/x/video.mp4"), StreamKind::Progressive);
        assert_eq!(StreamKind::classify("https://cdn/x/video"), StreamKind::Progressive);
    }

    #[test]
    fn classification_ignores_query_and_fragment() {
        assert_eq!(
            StreamKind::classify("https://cdn/master.m3u8?token=abc"),
            StreamKind::Hls
        );
        assert_eq!(
            StreamKind::classify("https://cdn/manifest.mpd#t=30"),
            StreamKind::Dash
        );
    }

    // === Binding lifecycle ===

    #[test]
    fn rebind_detaches_previous_engine_once() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let mut binding = StreamBinding::new();
        binding.rebind(engine(&log, false), "a.m3u8").unwrap();
        binding.rebind(engine(&log, false), "b.m3u8").unwrap();
        assert_eq!(log.borrow().detaches, 1);
        assert_eq!(binding.source(), Some("b.m3u8"));
    }

    #[test]
    fn failed_attach_leaves_binding_empty() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let mut binding = StreamBinding::new();
        let err = binding.rebind(engine(&log, true), "bad.mpd").unwrap_err();
        assert!(matches!(err, EngineError::Attach { .. }));
        assert!(!binding.is_bound());
        assert_eq!(binding.source(), None);
        // The failing engine was torn down, not leaked half-attached.
        assert_eq!(log.borrow().detaches, 1);
    }

    #[test]
    fn release_is_idempotent() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let mut binding = StreamBinding::new();
        binding.rebind(engine(&log, false), "a.m3u8").unwrap();
        binding.release();
        binding.release();
        assert_eq!(log.borrow().detaches, 1);
    }

    #[test]
    fn drop_releases_engine() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        {
            let mut binding = StreamBinding::new();
            binding.rebind(engine(&log, false), "a.m3u8").unwrap();
        }
        assert_eq!(log.borrow().detaches, 1);
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::Unsupported(StreamKind::Dash);
        assert_eq!(err.to_string(), "stream kind dash not supported by engine");
    }
}
