//! # Navigation Guard
//!
//! Intercepts every route transition and decides whether it proceeds or is
//! redirected to the public fallback. The decision is a total pure function
//! of the target route and the current session snapshot: authorization
//! denial is a redirect, never an error, and a missing session is simply the
//! lowest privilege.

use atrium_core::{AccessLevel, Role, RouteDescriptor, Session};
use serde::{Deserialize, Serialize};

/// Outcome of a guard check for a single route transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The transition proceeds to the target route.
    Proceed,
    /// The transition is redirected to the named fallback route.
    RedirectTo(String),
}

impl Decision {
    /// Whether the transition proceeds to its original target.
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// The redirect target, if the transition was denied.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo(name) => Some(name),
        }
    }
}

/// Decide whether a transition to `route` proceeds under `session`.
///
/// Only the target route's own access level is consulted; there is no
/// inheritance from parent routes. The admin gate checks organization
/// membership, the super-admin gate checks the role set; the two are
/// independent.
pub fn decide(route: &RouteDescriptor, session: Option<&Session>, fallback: &str) -> Decision {
    let allowed = match route.access {
        AccessLevel::Public => true,
        AccessLevel::Admin => session.is_some_and(Session::administers_any_organization),
        AccessLevel::SuperAdmin => session.is_some_and(|s| s.has_role(Role::SuperAdmin)),
    };

    tracing::debug!(
        route = %route.name,
        access = %route.access,
        allowed,
        "guard decision"
    );

    if allowed {
        Decision::Proceed
    } else {
        Decision::RedirectTo(fallback.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
