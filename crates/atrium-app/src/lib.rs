//! Atrium App - Portable Headless Application Shell Core
//!
//! This crate is the headless core of the Atrium application shell. It owns
//! the state a frontend renders and the command surface a frontend drives:
//!
//! - [`guard`]: the navigation authorization guard deciding proceed/redirect
//!   from the current session
//! - [`menu`]: the hierarchical menu tree with active-state propagation and
//!   the flat search projection over it
//! - [`layout`]: sidebar/overlay flags and the reentrant loading counter
//! - [`core`]: [`ShellCore`], the controller tying the stores together
//!   behind explicit command methods and a CQRS [`Intent`] dispatch
//! - [`bridge`]: the platform seam for the viewport width provider and the
//!   document title sink
//!
//! The crate is pure: no networking, no persistence, no rendering. Frontends
//! inject a [`PlatformBridge`] and subscribe to state via [`ShellObserver`].

#![forbid(unsafe_code)]

/// Platform seam (viewport width, document title)
pub mod bridge;

/// Core application module (controller, intents, snapshots)
pub mod core;

/// Navigation authorization guard
pub mod guard;

/// Sidebar/overlay layout state and loading counter
pub mod layout;

/// Hierarchical menu tree and search projection
pub mod menu;

/// Curated re-exports for frontends
pub mod prelude;

/// Shared-handle facade for frontends
pub mod ui;

pub use bridge::{BoxedPlatformBridge, HeadlessBridge, PlatformBridge};
pub use crate::core::{Intent, IntentError, ShellConfig, ShellCore, ShellObserver, StateSnapshot};
pub use guard::Decision;
pub use layout::LayoutState;
pub use menu::{MenuConfig, MenuEntry, MenuItemKind, MenuNode, MenuTree, NodeId, SearchHit};
pub use ui::UiShell;
