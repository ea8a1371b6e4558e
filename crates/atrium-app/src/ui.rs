//! UI-facing facade for atrium-app.
//!
//! Wraps [`ShellCore`] behind a shared lock so multiple frontend handles
//! (menu renderer, router adapter, title bar) drive one core. Commands are
//! synchronous and run to completion under the write lock, preserving the
//! one-event-at-a-time model.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::ShellCore;

/// Shared handle around `ShellCore` to discourage direct access to internals.
#[derive(Clone)]
pub struct UiShell {
    inner: Arc<RwLock<ShellCore>>,
}

impl UiShell {
    pub fn new(core: ShellCore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(core)),
        }
    }

    pub fn raw(&self) -> &Arc<RwLock<ShellCore>> {
        &self.inner
    }
}

impl From<ShellCore> for UiShell {
    fn from(core: ShellCore) -> Self {
        Self::new(core)
    }
}
