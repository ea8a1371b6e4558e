//! # Layout State
//!
//! Sidebar/overlay flags and the loading counter. The overlay flag is
//! derived from viewport width at toggle time, not an independent input, and
//! the loading counter is reentrant: overlapping begin/end pairs from
//! concurrent operations may arrive in any order and may be unbalanced.

use serde::{Deserialize, Serialize};

/// Below this width, opening the sidebar also shows the overlay.
pub const OVERLAY_BREAKPOINT: u32 = 991;

/// Below this width, a resize forces the sidebar closed.
pub const SIDEBAR_BREAKPOINT: u32 = 1199;

/// Sidebar, overlay, and loading state for the shell chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Whether the sidebar is shown.
    pub sidebar_open: bool,
    /// Whether the mobile overlay is visible behind the sidebar.
    pub overlay_visible: bool,
    /// Number of in-flight loading operations. Never negative.
    pub loading_depth: u32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            overlay_visible: false,
            loading_depth: 0,
        }
    }
}

impl LayoutState {
    /// Create the default layout state (sidebar open, nothing loading).
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the sidebar; the overlay follows the current viewport width.
    pub fn toggle_sidebar(&mut self, width: u32) {
        self.sidebar_open = !self.sidebar_open;
        self.overlay_visible = width < OVERLAY_BREAKPOINT;
        tracing::trace!(
            width,
            sidebar_open = self.sidebar_open,
            overlay_visible = self.overlay_visible,
            "sidebar toggled"
        );
    }

    /// Set the sidebar from viewport width alone.
    ///
    /// Pure in `width`: the same width always yields the same state,
    /// regardless of prior toggles. Below the breakpoint the sidebar is
    /// closed, at or above it is open.
    pub fn resize_toggle(&mut self, width: u32) {
        self.sidebar_open = width >= SIDEBAR_BREAKPOINT;
    }

    /// Begin or end a loading operation.
    ///
    /// The counter clamps at zero, so an unmatched end is silently absorbed
    /// rather than underflowing.
    pub fn set_loading(&mut self, is_loading: bool) {
        if is_loading {
            self.loading_depth += 1;
        } else {
            self.loading_depth = self.loading_depth.saturating_sub(1);
        }
    }

    /// Whether any loading operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading_depth > 0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_derives_overlay_from_width() {
        let mut layout = LayoutState::new();
        assert!(layout.sidebar_open);

        layout.toggle_sidebar(640);
        assert!(!layout.sidebar_open);
        assert!(layout.overlay_visible);

        layout.toggle_sidebar(1280);
        assert!(layout.sidebar_open);
        assert!(!layout.overlay_visible);

        // Boundary: the overlay appears strictly below the breakpoint.
        layout.toggle_sidebar(OVERLAY_BREAKPOINT);
        assert!(!layout.overlay_visible);
        layout.toggle_sidebar(OVERLAY_BREAKPOINT - 1);
        assert!(layout.overlay_visible);
    }

    #[test]
    fn resize_is_pure_in_width() {
        let mut a = LayoutState::new();
        let mut b = LayoutState::new();
        b.toggle_sidebar(1280);
        assert_ne!(a.sidebar_open, b.sidebar_open);

        // Same width, same resulting state, whatever came before.
        a.resize_toggle(800);
        b.resize_toggle(800);
        assert!(!a.sidebar_open);
        assert_eq!(a.sidebar_open, b.sidebar_open);

        a.resize_toggle(SIDEBAR_BREAKPOINT);
        assert!(a.sidebar_open);
        a.resize_toggle(SIDEBAR_BREAKPOINT - 1);
        assert!(!a.sidebar_open);

        // Idempotent for a fixed width.
        a.resize_toggle(1400);
        let once = a.clone();
        a.resize_toggle(1400);
        assert_eq!(a, once);
    }

    #[test]
    fn loading_counter_examples() {
        let mut layout = LayoutState::new();

        layout.set_loading(false);
        assert_eq!(layout.loading_depth, 0);

        layout.set_loading(true);
        layout.set_loading(true);
        layout.set_loading(false);
        assert_eq!(layout.loading_depth, 1);
        assert!(layout.is_loading());

        layout.set_loading(false);
        layout.set_loading(false);
        assert_eq!(layout.loading_depth, 0);
        assert!(!layout.is_loading());
    }

    proptest! {
        #[test]
        fn loading_depth_never_underflows(calls in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut layout = LayoutState::new();
            let mut balance: i64 = 0;
            for is_loading in calls {
                layout.set_loading(is_loading);
                balance += if is_loading { 1 } else { -1 };
                balance = balance.max(0);
                // Clamped running balance matches the counter after every call.
                prop_assert_eq!(layout.loading_depth as i64, balance);
            }
        }
    }
}
