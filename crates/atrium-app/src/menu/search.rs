//! # Menu Search Projection
//!
//! A flat, non-owning projection over the menu forest: hits reference tree
//! nodes by handle and carry a display icon denormalized from the top-level
//! ancestor. The scan is fixed at three levels (root, child, grandchild);
//! deeper nesting is not searched. Matching is a case-insensitive substring
//! test, nothing fuzzier.

use serde::{Deserialize, Serialize};

use super::tree::{MenuItemKind, MenuTree, NodeId};

/// One search result, referencing an existing tree node.
///
/// The icon here is display-only denormalization: nested hits show the icon
/// of their top-level ancestor, and the tree itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Handle of the matched node
    pub id: NodeId,
    /// Matched title
    pub title: String,
    /// Icon inherited from the top-level ancestor
    pub icon: Option<String>,
    /// Link path of the matched node, when it has one
    pub path: Option<String>,
}

/// Scan the forest for items whose title contains `query`.
///
/// Roots and children must be `Link` items to match; grandchildren match on
/// title alone (preserved legacy behavior). Because every string contains
/// the empty substring, an empty query returns every eligible item. This is
/// a documented quirk of the substring semantics, preserved literally.
pub fn search(tree: &MenuTree, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for &root in tree.roots() {
        let Some(top) = tree.get(root) else { continue };
        let top_icon = top.icon.clone();

        if top.kind == MenuItemKind::Link && matches(&top.title, &needle) {
            hits.push(SearchHit {
                id: root,
                title: top.title.clone(),
                icon: top_icon.clone(),
                path: top.path.clone(),
            });
        }

        for &child_id in tree.children(root) {
            let Some(child) = tree.get(child_id) else { continue };

            if child.kind == MenuItemKind::Link && matches(&child.title, &needle) {
                hits.push(SearchHit {
                    id: child_id,
                    title: child.title.clone(),
                    icon: top_icon.clone(),
                    path: child.path.clone(),
                });
            }

            for &grandchild_id in tree.children(child_id) {
                let Some(grandchild) = tree.get(grandchild_id) else { continue };

                // Depth three matches on title alone; the icon still comes
                // from the top-level ancestor, not the immediate parent.
                if matches(&grandchild.title, &needle) {
                    hits.push(SearchHit {
                        id: grandchild_id,
                        title: grandchild.title.clone(),
                        icon: top_icon.clone(),
                        path: grandchild.path.clone(),
                    });
                }
            }
        }
    }

    hits
}

fn matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

// ============================================================================
// Tests
// ============================================================================
