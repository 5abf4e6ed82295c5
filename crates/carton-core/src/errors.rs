//! Cross-cutting error types for Carton.
//!
//! Schema and configuration errors live in their own crates. A unified error
//! is deferred to `carton-cli` where all crate errors converge.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A required argument was empty or otherwise unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A relative path would resolve outside of its storage root.
    #[error("Relative path '{}' escapes the storage root", relative.display())]
    PathTraversal { relative: PathBuf },
}
