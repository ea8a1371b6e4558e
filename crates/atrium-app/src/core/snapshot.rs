//! FFI-safe snapshot of the shell state.
//!
//! Observers receive a fresh snapshot after every state-mutating command.
//! The snapshot is plain data: serializable for debugging, safe to hand
//! across an FFI boundary, detached from the live stores.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutState;
use crate::menu::SearchHit;

/// Point-in-time view of the shell for frontends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Name of the route currently shown, once any navigation resolved
    pub current_route: Option<String>,
    /// The last published document title
    pub document_title: Option<String>,
    /// Sidebar/overlay/loading state
    pub layout: LayoutState,
    /// Titles along the active menu path, root first
    pub active_path: Vec<String>,
    /// Latest search projection
    pub search_results: Vec<SearchHit>,
    /// Whether a session is present
    pub is_authenticated: bool,
    /// Organization count of the current session (0 when absent)
    pub organization_count: u32,
    /// Whether the current session carries the super-admin role
    pub is_super_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::NodeId;
    use crate::menu::SearchHit;

    #[test]
    fn snapshot_serializes_for_debugging() {
        let snapshot = StateSnapshot {
            current_route: Some("dashboard".into()),
            document_title: Some("User Activity".into()),
            layout: LayoutState::new(),
            active_path: vec!["Dashboard".into()],
            search_results: vec![SearchHit {
                id: NodeId(1),
                title: "Dashboard".into(),
                icon: Some("home".into()),
                path: Some("/admin/dashboard".into()),
            }],
            is_authenticated: true,
            organization_count: 2,
            is_super_admin: false,
        };

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: StateSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(snapshot, back);
    }
}
