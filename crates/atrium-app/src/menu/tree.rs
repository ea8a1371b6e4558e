//! # Menu Tree Store
//!
//! An arena of menu nodes with parent back-references. Active-state
//! propagation is scoped: activating a node only ever clears the branches
//! that could visually conflict with the new active path (its sibling
//! subtrees for a plain activation, competing top-level branches for a
//! route activation). Unrelated sections keep their state.

use serde::{Deserialize, Serialize};

// =============================================================================
// Node handles
// =============================================================================

/// Stable handle addressing a node in the menu arena.
///
/// Handles are only meaningful against the tree that issued them; after a
/// wholesale [`MenuTree::reload`] old handles harmlessly miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

// =============================================================================
// Node and config types
// =============================================================================

/// What a menu item is, presentation-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItemKind {
    /// Navigates somewhere when selected
    Link,
    /// Expandable group of child items
    Group,
    /// Non-interactive section heading
    Heading,
}

/// A node in the menu forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNode {
    /// Display title
    pub title: String,
    /// Item kind
    pub kind: MenuItemKind,
    /// Icon name, if the item carries one
    pub icon: Option<String>,
    /// Route path this item links to, for `Link` items
    pub path: Option<String>,
    /// Optional badge text ("new", a count, …)
    pub badge: Option<String>,
    /// Whether the item is on the current active path
    pub active: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// Declarative description of one menu entry and its children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub kind: MenuItemKind,
    pub icon: Option<String>,
    pub path: Option<String>,
    pub badge: Option<String>,
    pub children: Vec<MenuEntry>,
}

impl Default for MenuItemKind {
    fn default() -> Self {
        Self::Link
    }
}

impl MenuEntry {
    /// A link entry.
    pub fn link(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: MenuItemKind::Link,
            ..Self::default()
        }
    }

    /// A group entry.
    pub fn group(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: MenuItemKind::Group,
            ..Self::default()
        }
    }

    /// A section heading.
    pub fn heading(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: MenuItemKind::Heading,
            ..Self::default()
        }
    }

    /// Builder-style icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder-style link path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builder-style badge.
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Builder-style child entry.
    pub fn child(mut self, child: MenuEntry) -> Self {
        self.children.push(child);
        self
    }
}

/// Startup configuration for the whole menu forest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub entries: Vec<MenuEntry>,
}

impl MenuConfig {
    /// The menu of the reference application.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                MenuEntry::heading("Administration"),
                MenuEntry::link("Dashboard")
                    .icon("home")
                    .path("/admin/dashboard"),
                MenuEntry::link("Wallets")
                    .icon("credit-card")
                    .path("/admin/wallets"),
                MenuEntry::group("Organizations")
                    .icon("briefcase")
                    .child(MenuEntry::link("Organization Auth").path("/admin/o/:org_id"))
                    .child(
                        MenuEntry::group("Verification")
                            .child(MenuEntry::link("Pending Verifications"))
                            .child(MenuEntry::link("Approved Wallets")),
                    ),
                MenuEntry::link("Super Admin")
                    .icon("shield")
                    .path("/superadmin"),
            ],
        }
    }
}

// =============================================================================
// MenuTree
// =============================================================================

/// The menu forest: an arena of nodes plus the ordered root set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    roots: Vec<NodeId>,
}

impl MenuTree {
    /// Build a tree from a declarative config.
    pub fn from_config(config: &MenuConfig) -> Self {
        let mut tree = Self::default();
        for entry in &config.entries {
            let root = tree.insert(entry, None);
            tree.roots.push(root);
        }
        tree
    }

    /// Replace the whole forest from a new config.
    ///
    /// Handles issued against the previous forest become stale; mutations
    /// through them are no-ops.
    pub fn reload(&mut self, config: &MenuConfig) {
        *self = Self::from_config(config);
        tracing::trace!(nodes = self.nodes.len(), "menu reloaded");
    }

    fn insert(&mut self, entry: &MenuEntry, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MenuNode {
            title: entry.title.clone(),
            kind: entry.kind,
            icon: entry.icon.clone(),
            path: entry.path.clone(),
            badge: entry.badge.clone(),
            active: false,
            parent,
            children: Vec::new(),
        });
        for child_entry in &entry.children {
            let child = self.insert(child_entry, Some(id));
            self.nodes[id.0].children.push(child);
        }
        id
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Look up a node by handle.
    pub fn get(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    /// Ordered top-level handles.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Ordered child handles of a node; empty for a stale handle.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent handle of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Whether a node is currently active. Stale handles are inactive.
    pub fn is_active(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|n| n.active)
    }

    /// First node whose link path equals `path`.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.path.as_deref() == Some(path))
            .map(NodeId)
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles from the root to `id`, inclusive, root first.
    ///
    /// Empty for a stale handle.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        if self.get(id).is_none() {
            return Vec::new();
        }
        let mut chain = vec![id];
        let mut cursor = id;
        while let Some(parent) = self.parent(cursor) {
            chain.push(parent);
            cursor = parent;
        }
        chain.reverse();
        chain
    }

    /// The current active path, root first, following active flags downward.
    pub fn active_path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let Some(&root) = self.roots.iter().find(|&&r| self.is_active(r)) else {
            return path;
        };
        let mut cursor = root;
        path.push(cursor);
        while let Some(&next) = self
            .children(cursor)
            .iter()
            .find(|&&c| self.is_active(c))
        {
            path.push(next);
            cursor = next;
        }
        path
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Toggle a node's active flag, clearing conflicting siblings first.
    ///
    /// If the node was inactive, every other subtree in its sibling scope
    /// (children of its parent, or the root set for a top-level node) is
    /// deactivated before the node turns on; branches that do not share
    /// that parent are untouched. If the node was already active this is a
    /// pure toggle off with no cascade. Stale handles are no-ops.
    pub fn set_active(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        let was_active = node.active;
        if !was_active {
            let scope: Vec<NodeId> = match node.parent {
                Some(parent) => self.nodes[parent.0].children.clone(),
                None => self.roots.clone(),
            };
            for sibling in scope {
                if sibling != id {
                    self.deactivate_subtree(sibling);
                }
            }
        }
        self.nodes[id.0].active = !was_active;
        tracing::trace!(node = id.0, active = !was_active, "menu item toggled");
    }

    /// Mark the node matching the current navigation target active, along
    /// with its whole ancestor chain, and clear every competing top-level
    /// branch.
    ///
    /// Idempotent: re-applying with the same node leaves the same state.
    /// Nodes inside the target's own branch that are off the ancestor path
    /// keep their flags. Stale handles are no-ops.
    pub fn set_active_route(&mut self, id: NodeId) {
        let chain = self.path_to(id);
        let Some(&root) = chain.first() else {
            return;
        };
        for top in self.roots.clone() {
            if top != root {
                self.deactivate_subtree(top);
            }
        }
        for node in chain {
            self.nodes[node.0].active = true;
        }
        tracing::trace!(node = id.0, "active route set");
    }

    fn deactivate_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        node.active = false;
        let children = node.children.clone();
        for child in children {
            self.deactivate_subtree(child);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
