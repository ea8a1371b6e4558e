//! # ShellCore
//!
//! The controller owning the session store, route table, menu tree, and
//! layout state. All mutation goes through named command methods (or the
//! [`Intent`] dispatch wrapping them); there is no ambient global state.
//! Commands run to completion, and observers are notified with a fresh
//! snapshot after every state-mutating command.

use std::sync::Arc;

use atrium_core::{RouteDescriptor, RouteTable, Session, SessionStore};

use crate::bridge::BoxedPlatformBridge;
use crate::guard::{self, Decision};
use crate::layout::LayoutState;
use crate::menu::{self, MenuConfig, MenuTree, NodeId, SearchHit};

use super::{Intent, IntentError, StateSnapshot};

// =============================================================================
// Configuration
// =============================================================================

/// Shell configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Route name the guard redirects to on authorization denial.
    pub fallback_route: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            fallback_route: "landing".to_string(),
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Callback observer notified after every state-mutating command.
pub trait ShellObserver: Send + Sync {
    /// Called with a fresh post-mutation snapshot.
    fn state_changed(&self, snapshot: &StateSnapshot);
}

// =============================================================================
// ShellCore
// =============================================================================

/// The headless shell controller.
pub struct ShellCore {
    config: ShellConfig,
    routes: RouteTable,
    sessions: SessionStore,
    menu: MenuTree,
    layout: LayoutState,
    bridge: BoxedPlatformBridge,
    observers: Vec<Arc<dyn ShellObserver>>,
    current_route: Option<String>,
    document_title: Option<String>,
    search_results: Vec<SearchHit>,
}

impl ShellCore {
    /// Create a shell over the given route table and menu config.
    pub fn new(
        config: ShellConfig,
        routes: RouteTable,
        menu: &MenuConfig,
        bridge: BoxedPlatformBridge,
    ) -> Self {
        Self {
            config,
            routes,
            sessions: SessionStore::new(),
            menu: MenuTree::from_config(menu),
            layout: LayoutState::new(),
            bridge,
            observers: Vec::new(),
            current_route: None,
            document_title: None,
            search_results: Vec::new(),
        }
    }

    /// Create a shell with the reference application's routes and menu.
    pub fn standard(bridge: BoxedPlatformBridge) -> Self {
        Self::new(
            ShellConfig::default(),
            RouteTable::standard(),
            &MenuConfig::standard(),
            bridge,
        )
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch a UI intent into the matching command method.
    ///
    /// Returns the guard decision for `Navigate` intents, `None` otherwise.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<Decision>, IntentError> {
        match intent {
            Intent::Navigate { route } => self.navigate(&route).map(Some),
            Intent::ToggleSidebar => {
                self.toggle_sidebar();
                Ok(None)
            }
            Intent::ViewportResized => {
                self.viewport_resized();
                Ok(None)
            }
            Intent::SetLoading { loading } => {
                self.set_loading(loading);
                Ok(None)
            }
            Intent::Activate { item } => {
                self.activate(item);
                Ok(None)
            }
            Intent::ActivateRoute { item } => {
                self.activate_route(item);
                Ok(None)
            }
            Intent::Search { query } => {
                self.search(&query);
                Ok(None)
            }
            Intent::SessionReplaced { session } => {
                self.replace_session(session);
                Ok(None)
            }
            Intent::Logout => {
                self.logout();
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Request a transition to the named route.
    ///
    /// The guard decision resolves synchronously before any side effect. On
    /// a successful transition (to the target, or to the fallback after a
    /// denial) the destination's title is published through the platform
    /// bridge exactly once, the destination becomes current, and the menu
    /// item linking to its path is marked active.
    pub fn navigate(&mut self, name: &str) -> Result<Decision, IntentError> {
        let Some(route) = self.routes.get(name) else {
            return Err(IntentError::UnknownRoute {
                name: name.to_string(),
            });
        };

        let decision = guard::decide(route, self.sessions.snapshot(), &self.config.fallback_route);

        let destination: Option<RouteDescriptor> = match &decision {
            Decision::Proceed => Some(route.clone()),
            Decision::RedirectTo(fallback) => self.routes.get(fallback).cloned(),
        };

        match destination {
            Some(dest) => {
                if let Some(title) = &dest.title {
                    self.bridge.set_document_title(title);
                    self.document_title = Some(title.clone());
                }
                if let Some(item) = self.menu.find_by_path(&dest.path) {
                    self.menu.set_active_route(item);
                }
                self.current_route = Some(dest.name);
            }
            None => {
                // Fallback missing from the table: degrade to recording the
                // redirect target, with nothing to publish.
                if let Decision::RedirectTo(fallback) = &decision {
                    self.current_route = Some(fallback.clone());
                }
            }
        }

        self.notify();
        Ok(decision)
    }

    // =========================================================================
    // Layout commands
    // =========================================================================

    /// Flip the sidebar; the overlay follows the bridge's viewport width.
    pub fn toggle_sidebar(&mut self) {
        let width = self.bridge.viewport_width();
        self.layout.toggle_sidebar(width);
        self.notify();
    }

    /// Re-derive the sidebar state after a viewport resize.
    pub fn viewport_resized(&mut self) {
        let width = self.bridge.viewport_width();
        self.layout.resize_toggle(width);
        self.notify();
    }

    /// Begin or end one loading operation (clamped, reentrant).
    pub fn set_loading(&mut self, loading: bool) {
        self.layout.set_loading(loading);
        self.notify();
    }

    // =========================================================================
    // Menu commands
    // =========================================================================

    /// Toggle a menu item from direct selection.
    pub fn activate(&mut self, item: NodeId) {
        self.menu.set_active(item);
        self.notify();
    }

    /// Mark the menu item matching the current navigation target.
    pub fn activate_route(&mut self, item: NodeId) {
        self.menu.set_active_route(item);
        self.notify();
    }

    /// Recompute and cache the search projection.
    pub fn search(&mut self, query: &str) -> &[SearchHit] {
        self.search_results = menu::search(&self.menu, query);
        self.notify();
        &self.search_results
    }

    /// Replace the menu forest wholesale.
    pub fn reload_menu(&mut self, config: &MenuConfig) {
        self.menu.reload(config);
        self.search_results.clear();
        self.notify();
    }

    // =========================================================================
    // Session commands
    // =========================================================================

    /// Install the session produced by the login flow.
    pub fn replace_session(&mut self, session: Option<Session>) {
        self.sessions.replace(session);
        self.notify();
    }

    /// Clear the current session.
    pub fn logout(&mut self) {
        self.sessions.clear();
        self.notify();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The menu forest.
    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    /// The layout state.
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// The route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The current session snapshot.
    pub fn session(&self) -> Option<&Session> {
        self.sessions.snapshot()
    }

    /// Latest cached search projection.
    pub fn search_results(&self) -> &[SearchHit] {
        &self.search_results
    }

    /// Name of the route currently shown.
    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    /// Build a detached snapshot of the whole shell state.
    pub fn snapshot(&self) -> StateSnapshot {
        let session = self.sessions.snapshot();
        StateSnapshot {
            current_route: self.current_route.clone(),
            document_title: self.document_title.clone(),
            layout: self.layout.clone(),
            active_path: self
                .menu
                .active_path()
                .into_iter()
                .filter_map(|id| self.menu.get(id).map(|n| n.title.clone()))
                .collect(),
            search_results: self.search_results.clone(),
            is_authenticated: session.is_some(),
            organization_count: session.map_or(0, |s| s.organization_count),
            is_super_admin: session
                .is_some_and(|s| s.has_role(atrium_core::Role::SuperAdmin)),
        }
    }

    /// Register a state observer.
    pub fn observe(&mut self, observer: Arc<dyn ShellObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.state_changed(&snapshot);
        }
    }
}

impl std::fmt::Debug for ShellCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellCore")
            .field("current_route", &self.current_route)
            .field("layout", &self.layout)
            .field("menu_len", &self.menu.len())
            .field("authenticated", &self.sessions.is_authenticated())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::HeadlessBridge;
    use assert_matches::assert_matches;
    use atrium_core::{Role, Session};

    fn shell(width: u32) -> (ShellCore, HeadlessBridge) {
        let bridge = HeadlessBridge::new(width);
        let core = ShellCore::standard(Box::new(bridge.clone()));
        (core, bridge)
    }

    #[test]
    fn navigate_public_route_publishes_title_once() {
        let (mut core, bridge) = shell(1280);

        let decision = core.navigate("confirm").expect("route exists");
        assert!(decision.is_proceed());
        assert_eq!(bridge.title().as_deref(), Some("Get that web3 drip"));
        assert_eq!(bridge.title_publish_count(), 1);
        assert_eq!(core.current_route(), Some("confirm"));
    }

    #[test]
    fn denied_navigation_lands_on_fallback() {
        let (mut core, bridge) = shell(1280);

        let decision = core.navigate("dashboard").expect("route exists");
        assert_eq!(decision.redirect_target(), Some("landing"));
        assert_eq!(core.current_route(), Some("landing"));
        // The landing route has no title; nothing was published.
        assert_eq!(bridge.title_publish_count(), 0);
    }

    #[test]
    fn session_update_is_visible_to_the_next_navigation() {
        let (mut core, bridge) = shell(1280);

        core.replace_session(Some(Session::new().organizations(2)));
        let decision = core.navigate("dashboard").expect("route exists");
        assert!(decision.is_proceed());
        assert_eq!(bridge.title().as_deref(), Some("User Activity"));
        assert_eq!(bridge.title_publish_count(), 1);

        core.logout();
        let decision = core.navigate("dashboard").expect("route exists");
        assert!(!decision.is_proceed());
    }

    #[test]
    fn navigation_marks_the_matching_menu_item() {
        let (mut core, _bridge) = shell(1280);

        core.replace_session(Some(Session::new().organizations(1)));
        core.navigate("wallets").expect("route exists");

        let snapshot = core.snapshot();
        assert_eq!(snapshot.active_path, ["Wallets"]);
    }

    #[test]
    fn unknown_route_is_an_error_not_a_redirect() {
        let (mut core, _bridge) = shell(1280);
        let err = core.navigate("nope").expect_err("unknown route");
        assert_matches!(err, IntentError::UnknownRoute { name } if name == "nope");
    }

    #[test]
    fn dispatch_covers_every_intent() {
        let (mut core, bridge) = shell(640);

        core.dispatch(Intent::SessionReplaced {
            session: Some(Session::with_roles([Role::SuperAdmin])),
        })
        .expect("dispatch");
        let decision = core
            .dispatch(Intent::Navigate {
                route: "superadmin".into(),
            })
            .expect("dispatch")
            .expect("navigate yields a decision");
        assert!(decision.is_proceed());
        assert_eq!(bridge.title().as_deref(), Some("Super Admin"));

        core.dispatch(Intent::ToggleSidebar).expect("dispatch");
        assert!(!core.layout().sidebar_open);
        assert!(core.layout().overlay_visible); // width 640 < 991

        core.dispatch(Intent::SetLoading { loading: true })
            .expect("dispatch");
        assert!(core.layout().is_loading());

        core.dispatch(Intent::Search {
            query: "dash".into(),
        })
        .expect("dispatch");
        assert_eq!(core.search_results().len(), 1);

        core.dispatch(Intent::Logout).expect("dispatch");
        assert!(core.session().is_none());
    }

    #[test]
    fn viewport_resize_follows_bridge_width() {
        let (mut core, bridge) = shell(1400);

        core.viewport_resized();
        assert!(core.layout().sidebar_open);

        bridge.set_width(1000);
        core.viewport_resized();
        assert!(!core.layout().sidebar_open);

        // Same width, same result, regardless of interleaved toggles.
        core.toggle_sidebar();
        core.viewport_resized();
        assert!(!core.layout().sidebar_open);
    }

    #[test]
    fn reload_menu_clears_cached_search_results() {
        let (mut core, _bridge) = shell(1280);

        core.search("wallets");
        assert!(!core.search_results().is_empty());

        core.reload_menu(&MenuConfig::default());
        assert!(core.search_results().is_empty());
        assert!(core.menu().is_empty());
    }
}
