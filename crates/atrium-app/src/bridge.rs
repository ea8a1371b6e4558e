//! # PlatformBridge: Abstract Host Operations
//!
//! This module defines the `PlatformBridge` trait, which abstracts the two
//! host facilities the shell core consults: the viewport width provider and
//! the document title sink. This keeps `atrium-app` a pure application core
//! with no direct dependency on a browser, terminal, or windowing system.
//!
//! ```text
//! atrium-app (pure)         frontend (host)
//! ┌────────────────┐        ┌─────────────────┐
//! │ ShellCore      │        │ implements      │
//! │  ┌────────────┐│        │ PlatformBridge  │
//! │  │PlatformBridge│◄──────│ (DOM, TUI, …)   │
//! │  └────────────┘│        └─────────────────┘
//! └────────────────┘
//! ```

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

/// Host facilities consulted synchronously by the shell core.
pub trait PlatformBridge: Send + Sync {
    /// Current viewport width in abstract units.
    fn viewport_width(&self) -> u32;

    /// Publish the active document title.
    fn set_document_title(&self, title: &str);
}

/// Boxed bridge for dynamic dispatch.
pub type BoxedPlatformBridge = Box<dyn PlatformBridge>;

// =============================================================================
// Headless bridge
// =============================================================================

#[derive(Default)]
struct HeadlessInner {
    width: AtomicU32,
    title: Mutex<Option<String>>,
    title_sets: AtomicUsize,
}

/// In-memory bridge for tests and headless embedding.
///
/// Clones share the same state, so a caller can keep a handle after boxing
/// one clone into the shell core.
#[derive(Clone, Default)]
pub struct HeadlessBridge {
    inner: Arc<HeadlessInner>,
}

impl HeadlessBridge {
    /// Create a bridge reporting the given viewport width.
    pub fn new(width: u32) -> Self {
        let bridge = Self::default();
        bridge.set_width(width);
        bridge
    }

    /// Change the reported viewport width.
    pub fn set_width(&self, width: u32) {
        self.inner.width.store(width, Ordering::SeqCst);
    }

    /// The last published document title, if any.
    pub fn title(&self) -> Option<String> {
        self.inner.title.lock().clone()
    }

    /// How many times a title has been published.
    pub fn title_publish_count(&self) -> usize {
        self.inner.title_sets.load(Ordering::SeqCst)
    }
}

impl PlatformBridge for HeadlessBridge {
    fn viewport_width(&self) -> u32 {
        self.inner.width.load(Ordering::SeqCst)
    }

    fn set_document_title(&self, title: &str) {
        *self.inner.title.lock() = Some(title.to_string());
        self.inner.title_sets.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_bridge_clones_share_state() {
        let bridge = HeadlessBridge::new(1280);
        let boxed: BoxedPlatformBridge = Box::new(bridge.clone());

        boxed.set_document_title("Dashboard");
        assert_eq!(bridge.title().as_deref(), Some("Dashboard"));
        assert_eq!(bridge.title_publish_count(), 1);

        bridge.set_width(640);
        assert_eq!(boxed.viewport_width(), 640);
    }
}
