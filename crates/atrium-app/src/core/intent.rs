//! # Intents: UI Actions as Commands
//!
//! An intent is a discrete UI action dispatched into the shell core. Each
//! intent runs to completion before the next is processed (single-threaded
//! event model), so a session replacement is always visible to the next
//! navigation.

use atrium_core::Session;
use serde::{Deserialize, Serialize};

use crate::menu::NodeId;

/// A UI action dispatched into the shell core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Intent {
    /// Request a transition to the named route; the guard decides.
    Navigate {
        /// Target route name
        route: String,
    },

    /// Flip the sidebar open/closed (overlay follows viewport width).
    ToggleSidebar,

    /// The viewport was resized; re-derive the sidebar state from width.
    ViewportResized,

    /// Begin (`true`) or end (`false`) one loading operation.
    SetLoading {
        /// Whether a loading operation is starting
        loading: bool,
    },

    /// Toggle a menu item from direct UI selection.
    Activate {
        /// Handle of the selected item
        item: NodeId,
    },

    /// Mark the menu item matching the current navigation target.
    ActivateRoute {
        /// Handle of the item corresponding to the target
        item: NodeId,
    },

    /// Recompute the search projection for a query.
    Search {
        /// Query string (substring, case-insensitive)
        query: String,
    },

    /// The login flow produced a new session (wholesale replacement).
    SessionReplaced {
        /// The new session, if any
        session: Option<Session>,
    },

    /// Log out, clearing the current session.
    Logout,
}
