//! # Menu Tree Module
//!
//! The hierarchical menu forest and its flat search projection. Nodes live
//! in an arena addressed by stable [`NodeId`] handles; every mutation is a
//! total function over the tree, so a stale handle finds no match and does
//! nothing.

mod search;
mod tree;

pub use search::{search, SearchHit};
pub use tree::{MenuConfig, MenuEntry, MenuItemKind, MenuNode, MenuTree, NodeId};
