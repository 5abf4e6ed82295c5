use std::path::{Path, PathBuf};

use carton_core::{CoreError, EXPORT_SUBPATH, ExportPaths, ProjectAttribute, attributes, resolve};
use pretty_assertions::assert_eq;

#[test]
fn resolve_is_a_pure_join() {
    let root = Path::new("/srv/exports");
    let resolved = resolve(root, "proj123.tar").expect("valid inputs");
    assert_eq!(resolved, root.join("proj123.tar"));
    // Nothing was created on disk.
    assert!(!resolved.exists());
}

#[test]
fn storage_root_is_shared_path_plus_export_subpath() {
    let paths = ExportPaths::new("/var/opt/gitlab/shared").expect("valid shared path");
    assert_eq!(
        paths.storage_root(),
        Path::new("/var/opt/gitlab/shared").join(EXPORT_SUBPATH)
    );
}

#[test]
fn every_export_path_stays_below_storage_root() {
    let paths = ExportPaths::new("/var/opt/gitlab/shared").expect("valid shared path");
    for relative in ["a", "a/b", "./a/./b/c.tar.gz", "namespace/project/123_export.tar.gz"] {
        let path = paths.export_path(relative).expect("valid relative path");
        assert!(path.starts_with(paths.storage_root()), "{relative} escaped");
    }
    for relative in ["..", "a/../../b", "/abs"] {
        assert!(matches!(
            paths.export_path(relative),
            Err(CoreError::PathTraversal { .. })
        ));
    }
}

#[test]
fn traversal_error_names_the_offending_path() {
    let err = resolve("/srv/exports", "../secrets").expect_err("must be rejected");
    match err {
        CoreError::PathTraversal { relative } => assert_eq!(relative, PathBuf::from("../secrets")),
        other => panic!("expected PathTraversal, got {other:?}"),
    }
}

#[test]
fn whitelist_is_stable_across_calls() {
    assert_eq!(attributes(), attributes());
    assert_eq!(attributes().first(), Some(&ProjectAttribute::Name));
    assert_eq!(attributes().last(), Some(&ProjectAttribute::Archived));
}
