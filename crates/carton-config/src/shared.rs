//! Shared storage configuration.

use carton_core::ExportPaths;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default shared storage path, relative to the working directory.
fn default_path() -> String {
    String::from("shared")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SharedConfig {
    /// Root directory for shared artifacts. Exports are staged under
    /// `<path>/tmp/project_exports`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl SharedConfig {
    /// Build the export path resolver rooted at this shared path.
    pub fn export_paths(&self) -> Result<ExportPaths, ConfigError> {
        ExportPaths::new(&self.path).map_err(|error| ConfigError::InvalidValue {
            field: "shared.path".to_string(),
            reason: error.to_string(),
        })
    }
}
