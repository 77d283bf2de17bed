//! Credential persistence settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the two credentials live between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "backend")]
pub enum SessionConfig {
    /// Process-local, lost on exit
    #[default]
    Memory,
    /// JSON document on disk
    File { path: PathBuf },
}

impl SessionConfig {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self::File { path: path.into() }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}
