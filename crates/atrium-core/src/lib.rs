//! Atrium Core - Foundational Shell Domain Types
//!
//! This crate provides the pure domain types underneath the Atrium
//! application shell. It contains no UI logic and no platform bindings:
//!
//! - [`Session`] / [`SessionStore`]: the authenticated user's authorization
//!   attributes, replaced wholesale on login/logout
//! - [`Role`] / [`AccessLevel`]: the role lattice consulted by the
//!   navigation guard
//! - [`RouteDescriptor`] / [`RouteTable`]: the static route table defined at
//!   startup and immutable thereafter
//!
//! The application core (`atrium-app`) depends on this crate; nothing here
//! depends back on it.

#![forbid(unsafe_code)]

/// Session, roles, and the session store
pub mod session;

/// Route descriptors and the route table
pub mod routes;

pub use routes::{AccessLevel, RouteDescriptor, RouteTable, RouteTableError};
pub use session::{Role, Session, SessionObserver, SessionStore};
