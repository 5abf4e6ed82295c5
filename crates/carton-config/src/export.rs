//! Export planning configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default archive file extension.
fn default_archive_extension() -> String {
    String::from("tar.gz")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Path to a YAML export tree. If empty, the bundled tree is used.
    #[serde(default)]
    pub schema_path: String,

    /// Extension appended to archive file names.
    #[serde(default = "default_archive_extension")]
    pub archive_extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema_path: String::new(),
            archive_extension: default_archive_extension(),
        }
    }
}

impl ExportConfig {
    /// The schema file override, if one is configured.
    #[must_use]
    pub fn schema_file(&self) -> Option<PathBuf> {
        let trimmed = self.schema_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }

    /// Archive file name for `stem`, e.g. `project.tar.gz`.
    #[must_use]
    pub fn archive_name(&self, stem: &str) -> String {
        let extension = self.archive_extension.trim_start_matches('.');
        if extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{extension}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert!(config.schema_path.is_empty());
        assert_eq!(config.archive_extension, "tar.gz");
        assert_eq!(config.schema_file(), None);
    }

    #[test]
    fn blank_schema_path_means_bundled() {
        let config = ExportConfig {
            schema_path: "   ".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(config.schema_file(), None);
    }

    #[test]
    fn schema_path_override() {
        let config = ExportConfig {
            schema_path: "config/import_export.yml".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.schema_file(),
            Some(PathBuf::from("config/import_export.yml"))
        );
    }

    #[test]
    fn archive_name_tolerates_leading_dot() {
        let mut config = ExportConfig::default();
        assert_eq!(config.archive_name("project"), "project.tar.gz");

        config.archive_extension = ".tar".to_string();
        assert_eq!(config.archive_name("project"), "project.tar");

        config.archive_extension = String::new();
        assert_eq!(config.archive_name("project"), "project");
    }
}
