//! Schema Reader: turns a [`SchemaSource`] into a validated [`ExportSchema`].

use crate::decode;
use crate::error::SchemaError;
use crate::source::{BundledSource, SchemaSource};
use crate::tree::ExportSchema;

#[derive(Debug, Clone, Default)]
pub struct SchemaReader<S> {
    source: S,
}

impl<S: SchemaSource> SchemaReader<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Read the source and decode it.
    ///
    /// Deterministic for a given source: the same document always yields the
    /// same tree.
    pub fn load_schema(&self) -> Result<ExportSchema, SchemaError> {
        let name = self.source.name();
        tracing::debug!(source = %name, "reading export schema");

        let text = self.source.read()?;
        let schema = decode::from_yaml_str(&text)?;

        tracing::debug!(source = %name, relations = schema.len(), "export schema loaded");
        Ok(schema)
    }
}

/// Load the bundled export tree.
pub fn load_schema() -> Result<ExportSchema, SchemaError> {
    SchemaReader::new(BundledSource).load_schema()
}
