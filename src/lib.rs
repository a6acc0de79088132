//! drivefs: an in-memory, drive-lettered virtual filesystem for a simulated desktop shell.
//!
//! Paths look like `C:\Users\User\Desktop` or `C:/Users/User/Desktop`; `~`
//! expands to the home directory. Every successful mutation bumps a version
//! counter that observers can watch for coarse change notification.

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod shared;
pub mod types;

// Re-export
pub use backend::VfsBackend;
pub use backends::VfsMem;
pub use config::{SeedTree, VfsConfig};
pub use error::{VfsError, VfsResult};
pub use shared::SharedVfs;
pub use types::*;
