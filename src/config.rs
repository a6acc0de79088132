//! Construction-time settings for a [`VfsMem`](crate::VfsMem).

use serde::{Deserialize, Serialize};

use crate::error::{VfsError, VfsResult};
use crate::path::{self, HOME};

/// Which tree a new filesystem starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedTree {
    /// The stock desktop layout on `C:` and `D:`.
    #[default]
    Default,
    /// No drives at all; `mkdir` and `write_file` create them on demand.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VfsConfig {
    /// Directory that `~` expands to.
    pub home: String,
    pub seed: SeedTree,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            home: HOME.to_string(),
            seed: SeedTree::Default,
        }
    }
}

impl VfsConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> VfsResult<Self> {
        let config: VfsConfig =
            toml::from_str(source).map_err(|e| VfsError::Config(e.to_string()))?;
        config.validated()
    }

    /// Normalize `home` and check that it names a drive-rooted path.
    pub fn validated(mut self) -> VfsResult<Self> {
        let home = path::normalize_path(self.home.trim());
        if path::split_path(&home).is_empty() {
            return Err(VfsError::Config(format!(
                "home must be an absolute drive path, got {:?}",
                self.home
            )));
        }
        self.home = path::to_absolute_in(&home, &home, &home);
        Ok(self)
    }
}
