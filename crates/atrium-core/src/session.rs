//! # Session State
//!
//! The session is an opaque product of the external login flow. The store
//! holds at most one session at a time and replaces it wholesale on
//! login/logout; nothing in the shell mutates a session in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

// =============================================================================
// Roles
// =============================================================================

/// A privilege role carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Organization administrator
    Admin,
    /// Platform-wide super administrator
    SuperAdmin,
}

impl Role {
    /// Short label for logging/display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Session
// =============================================================================

/// The authenticated user's current authorization attributes.
///
/// Produced externally by the login flow. The guard only ever reads a
/// synchronous snapshot; absence of a session means lowest privilege.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Roles granted to the user
    pub roles: BTreeSet<Role>,
    /// Number of organizations the user administers
    pub organization_count: u32,
}

impl Session {
    /// Create a session with no roles and no organizations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session carrying the given roles.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            organization_count: 0,
        }
    }

    /// Builder-style organization count.
    pub fn organizations(mut self, count: u32) -> Self {
        self.organization_count = count;
        self
    }

    /// Whether the session carries the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether the session can administer at least one organization.
    pub fn administers_any_organization(&self) -> bool {
        self.organization_count > 0
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Callback observer fired whenever the current session is replaced.
pub trait SessionObserver: Send + Sync {
    /// Called with the new session snapshot (`None` after logout).
    fn session_changed(&self, session: Option<&Session>);
}

/// Holds the current session, if any.
///
/// Replacement is wholesale: login installs a complete new session, logout
/// clears it. There is no partial mutation path.
#[derive(Default)]
pub struct SessionStore {
    current: Option<Session>,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl SessionStore {
    /// Create an empty store (no authenticated session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current session.
    pub fn snapshot(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Whether any session is present.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the current session wholesale and notify observers.
    pub fn replace(&mut self, session: Option<Session>) {
        tracing::debug!(
            authenticated = session.is_some(),
            "session replaced"
        );
        self.current = session;
        self.notify();
    }

    /// Clear the current session (logout).
    pub fn clear(&mut self) {
        self.replace(None);
    }

    /// Register a change observer.
    pub fn observe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.session_changed(self.current.as_ref());
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
