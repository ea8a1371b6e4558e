//! # Route Table
//!
//! Routes are declared once at startup and immutable thereafter. Each route
//! carries its own access level; there is no inheritance from parent routes,
//! and a route without an explicit requirement is public.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Access Levels
// =============================================================================

/// Access level required to navigate to a route.
///
/// Levels are ordered: `Public < Admin < SuperAdmin`. Note that `Admin` is
/// not implied by `SuperAdmin`: the admin gate checks organization
/// membership, not the role set, so the two gates are independent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AccessLevel {
    /// No authorization required
    #[default]
    Public,
    /// Requires a session administering at least one organization
    Admin,
    /// Requires the super-admin role
    SuperAdmin,
}

impl AccessLevel {
    /// Check if this level requires any authorization.
    #[inline]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Public)
    }

    /// Get a short label for logging/display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Route Descriptors
// =============================================================================

/// A single navigable route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL-style path ("/admin/dashboard")
    pub path: String,
    /// Unique route name ("dashboard")
    pub name: String,
    /// Access level consulted by the navigation guard
    pub access: AccessLevel,
    /// Document title published on a successful transition, when present
    pub title: Option<String>,
}

impl RouteDescriptor {
    /// Create a public route with no title.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            access: AccessLevel::Public,
            title: None,
        }
    }

    /// Builder-style access level.
    pub fn access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    /// Builder-style title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// Error raised while constructing a route table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Duplicate route name '{name}'")]
    DuplicateName { name: String },
}

/// Insertion-ordered collection of routes, indexed by unique name.
///
/// Nested child routes that render inside a parent layout shell are flat
/// entries here; the shell resolution is a rendering concern outside this
/// core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTable {
    routes: IndexMap<String, RouteDescriptor>,
}

impl RouteTable {
    /// Build a table from descriptors, rejecting duplicate names.
    pub fn new(
        descriptors: impl IntoIterator<Item = RouteDescriptor>,
    ) -> Result<Self, RouteTableError> {
        let mut routes = IndexMap::new();
        for descriptor in descriptors {
            let name = descriptor.name.clone();
            if routes.insert(name.clone(), descriptor).is_some() {
                return Err(RouteTableError::DuplicateName { name });
            }
        }
        Ok(Self { routes })
    }

    /// The route set of the reference application.
    pub fn standard() -> Self {
        let descriptors = [
            RouteDescriptor::new("/", "landing"),
            RouteDescriptor::new("/t/:context_id", "confirm").title("Get that web3 drip"),
            RouteDescriptor::new("/admin/dashboard", "dashboard")
                .access(AccessLevel::Admin)
                .title("User Activity"),
            RouteDescriptor::new("/admin/wallets", "wallets")
                .access(AccessLevel::Admin)
                .title("User Verifications"),
            RouteDescriptor::new("/admin/o/:org_id", "org_auth").title("Organization Auth"),
            RouteDescriptor::new("/superadmin", "superadmin")
                .access(AccessLevel::SuperAdmin)
                .title("Super Admin"),
        ];
        // Names above are distinct by construction.
        Self::new(descriptors).unwrap_or_default()
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.get(name)
    }

    /// Look up a route by path.
    pub fn by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.values().find(|r| r.path == path)
    }

    /// Iterate routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.values()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
