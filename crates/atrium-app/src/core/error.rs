//! Error types for intent dispatch.
//!
//! Authorization denial is *not* an error: the guard resolves it as a
//! redirect decision. Errors here are reserved for genuinely malformed
//! commands, currently only navigation to a name missing from the route
//! table.

use thiserror::Error;

/// Error raised while dispatching an intent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("Unknown route '{name}'")]
    UnknownRoute { name: String },
}
