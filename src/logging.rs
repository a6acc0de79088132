//! Structured logging via `tracing`.
//!
//! The engine emits `debug!` events for every mutation (`op`, `path`, and
//! either the new `version` or the rejection reason). Hosts that do not
//! install their own subscriber can call [`init_tracing`].

use tracing_subscriber::EnvFilter;

use crate::error::{VfsError, VfsResult};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g. `"drivefs=debug"`).
pub fn init_tracing(default_directive: &str) -> VfsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| VfsError::Config(format!("invalid log directive: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| VfsError::Config(format!("logging already initialised: {e}")))
}
