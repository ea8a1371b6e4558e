//! # Core Application Module
//!
//! This module contains the core shell types and logic:
//!
//! - [`ShellCore`]: the controller owning every store, driven by explicit
//!   command methods
//! - [`Intent`]: UI actions dispatched into those commands
//! - [`StateSnapshot`]: FFI-safe state snapshot handed to observers
//! - [`ShellConfig`]: shell configuration
//! - [`IntentError`]: error type for intent dispatch

mod error;
mod intent;
mod shell;
mod snapshot;

pub use error::IntentError;
pub use intent::Intent;
pub use shell::{ShellConfig, ShellCore, ShellObserver};
pub use snapshot::StateSnapshot;
