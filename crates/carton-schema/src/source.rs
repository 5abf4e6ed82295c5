//! Where the raw schema document comes from.

use std::path::{Path, PathBuf};

use crate::error::SchemaError;

/// The export tree shipped with this build.
pub const BUNDLED_SCHEMA: &str = include_str!("../schema/import_export.yml");

/// A readable schema document.
pub trait SchemaSource {
    /// Human-readable description used in errors and logs.
    fn name(&self) -> String;

    /// Read the raw document text.
    fn read(&self) -> Result<String, SchemaError>;
}

impl<T: SchemaSource + ?Sized> SchemaSource for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn read(&self) -> Result<String, SchemaError> {
        (**self).read()
    }
}

/// The tree compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl SchemaSource for BundledSource {
    fn name(&self) -> String {
        "bundled import_export.yml".to_string()
    }

    fn read(&self) -> Result<String, SchemaError> {
        Ok(BUNDLED_SCHEMA.to_string())
    }
}

/// A YAML document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, SchemaError> {
        std::fs::read_to_string(&self.path).map_err(|error| SchemaError::Load {
            source_name: self.name(),
            reason: error.to_string(),
        })
    }
}

/// Pick the file override when one is configured, the bundled tree otherwise.
#[must_use]
pub fn source_for(schema_file: Option<PathBuf>) -> Box<dyn SchemaSource + Send + Sync> {
    match schema_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}
