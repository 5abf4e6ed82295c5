//! # carton-core
//!
//! Core types shared across all Carton crates:
//! - Staging path resolution for export/import artifacts
//! - The curated whitelist of exportable project attributes
//! - Cross-cutting error types

pub mod attributes;
pub mod errors;
pub mod paths;

pub use attributes::{ProjectAttribute, attribute_names, attributes, filter_attributes};
pub use errors::CoreError;
pub use paths::{EXPORT_SUBPATH, ExportPaths, resolve};
