//! Staging path resolution for export/import artifacts.
//!
//! Everything here is pure path arithmetic. Nothing touches the filesystem:
//! callers own directory creation and the I/O errors that come with it.

use std::path::{Component, Path, PathBuf};

use crate::errors::CoreError;

/// Location of export archives below the shared storage path.
pub const EXPORT_SUBPATH: &str = "tmp/project_exports";

/// Join `relative` onto `root`.
///
/// Fails with [`CoreError::InvalidArgument`] when either input is empty and
/// with [`CoreError::PathTraversal`] when `relative` is absolute or contains a
/// `..` component. `.` components are dropped.
pub fn resolve(root: impl AsRef<Path>, relative: impl AsRef<Path>) -> Result<PathBuf, CoreError> {
    let root = root.as_ref();
    let relative = relative.as_ref();

    if root.as_os_str().is_empty() {
        return Err(CoreError::InvalidArgument(
            "storage root must not be empty".to_string(),
        ));
    }
    if relative.as_os_str().is_empty() {
        return Err(CoreError::InvalidArgument(
            "relative path must not be empty".to_string(),
        ));
    }

    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                tracing::warn!(relative = %relative.display(), "rejected relative path outside storage root");
                return Err(CoreError::PathTraversal {
                    relative: relative.to_path_buf(),
                });
            }
        }
    }

    if resolved == root {
        return Err(CoreError::InvalidArgument(format!(
            "relative path '{}' does not name anything below the storage root",
            relative.display()
        )));
    }

    Ok(resolved)
}

/// Export staging locations derived from the shared storage path.
///
/// Built once from configuration at startup and handed to whoever plans an
/// export or an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    storage_root: PathBuf,
}

impl ExportPaths {
    /// Derive the export root as `<shared_path>/tmp/project_exports`.
    pub fn new(shared_path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let storage_root = resolve(shared_path, EXPORT_SUBPATH)?;
        Ok(Self { storage_root })
    }

    /// Use `storage_root` as-is, without appending [`EXPORT_SUBPATH`].
    pub fn with_storage_root(storage_root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let storage_root = storage_root.into();
        if storage_root.as_os_str().is_empty() {
            return Err(CoreError::InvalidArgument(
                "storage root must not be empty".to_string(),
            ));
        }
        Ok(Self { storage_root })
    }

    #[must_use]
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Staging path of an artifact below the storage root.
    pub fn export_path(&self, relative: impl AsRef<Path>) -> Result<PathBuf, CoreError> {
        resolve(&self.storage_root, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn joins_root_and_relative() {
        let path = resolve("/srv/exports", "proj123.tar").unwrap();
        assert_eq!(path, Path::new("/srv/exports").join("proj123.tar"));
    }

    #[cfg(unix)]
    #[test]
    fn uses_forward_slash_on_unix() {
        let path = resolve("/srv/exports", "proj123.tar").unwrap();
        assert_eq!(path, PathBuf::from("/srv/exports/proj123.tar"));
    }

    #[test]
    fn nested_relative_paths_are_kept() {
        let path = resolve("/srv/exports", "group/project/export.tar.gz").unwrap();
        assert_eq!(
            path,
            Path::new("/srv/exports")
                .join("group")
                .join("project")
                .join("export.tar.gz")
        );
    }

    #[test]
    fn current_dir_components_are_dropped() {
        let path = resolve("/srv/exports", "./group/./a.tar").unwrap();
        assert_eq!(path, Path::new("/srv/exports").join("group").join("a.tar"));
    }

    #[rstest]
    #[case("", "proj.tar")]
    #[case("/srv/exports", "")]
    #[case("/srv/exports", ".")]
    fn empty_inputs_are_invalid(#[case] root: &str, #[case] relative: &str) {
        let err = resolve(root, relative).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)), "got {err:?}");
    }

    #[rstest]
    #[case("../etc/passwd")]
    #[case("group/../../outside.tar")]
    #[case("/etc/passwd")]
    fn traversal_is_rejected(#[case] relative: &str) {
        let err = resolve("/srv/exports", relative).unwrap_err();
        assert!(matches!(err, CoreError::PathTraversal { .. }), "got {err:?}");
    }

    #[test]
    fn storage_root_appends_export_subpath() {
        let paths = ExportPaths::new("/var/opt/shared").unwrap();
        assert_eq!(
            paths.storage_root(),
            Path::new("/var/opt/shared").join("tmp").join("project_exports")
        );
    }

    #[test]
    fn export_path_lands_under_storage_root() {
        let paths = ExportPaths::new("/var/opt/shared").unwrap();
        let path = paths.export_path("namespace/project").unwrap();
        assert!(path.starts_with(paths.storage_root()));
        assert!(path.ends_with("namespace/project"));
    }

    #[test]
    fn empty_shared_path_is_invalid() {
        assert!(matches!(
            ExportPaths::new(""),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExportPaths::with_storage_root(""),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn explicit_storage_root_is_used_verbatim() {
        let paths = ExportPaths::with_storage_root("/mnt/exports").unwrap();
        assert_eq!(paths.storage_root(), Path::new("/mnt/exports"));
    }
}
