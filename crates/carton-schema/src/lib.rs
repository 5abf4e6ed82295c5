//! # carton-schema
//!
//! The export tree: which relations a project archive contains and which
//! relations are nested under each of them.
//!
//! This crate provides:
//! - `TreeNode` / `ExportSchema`: the decoded tree (leaf or composite nodes)
//! - `SchemaSource` implementations for the bundled tree and on-disk overrides
//! - `SchemaReader` and `SchemaCache` for loading the tree once per owner
//! - `flatten`: the ordered top-level relation list exporters and importers walk
//!
//! ## Source format
//!
//! ```yaml
//! project_tree:
//!   - labels
//!   - issues:
//!       - notes
//! ```
//!
//! A composite entry must be a mapping with exactly one key. Anything else is
//! rejected at load time with [`SchemaError::MalformedTree`].

pub mod cache;
pub mod decode;
pub mod error;
pub mod flatten;
pub mod reader;
pub mod source;
pub mod tree;

pub use cache::SchemaCache;
pub use error::SchemaError;
pub use flatten::flatten;
pub use reader::{SchemaReader, load_schema};
pub use source::{BUNDLED_SCHEMA, BundledSource, FileSource, SchemaSource, source_for};
pub use tree::{ArchiveShapeReport, ExportSchema, SchemaEntry, TreeNode};
