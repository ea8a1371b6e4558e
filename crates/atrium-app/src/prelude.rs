//! Atrium App prelude.
//!
//! Curated re-exports for frontend usage without pulling in extra modules.

pub use crate::bridge::{BoxedPlatformBridge, HeadlessBridge, PlatformBridge};
pub use crate::core::{Intent, IntentError, ShellConfig, ShellCore, ShellObserver, StateSnapshot};
pub use crate::guard::Decision;
pub use crate::layout::{LayoutState, OVERLAY_BREAKPOINT, SIDEBAR_BREAKPOINT};
pub use crate::menu::{MenuConfig, MenuEntry, MenuItemKind, MenuTree, NodeId, SearchHit};
pub use crate::ui::UiShell;

pub use atrium_core::{
    AccessLevel, Role, RouteDescriptor, RouteTable, Session, SessionObserver, SessionStore,
};
