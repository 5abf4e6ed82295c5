//! Schema error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema source is missing or could not be read.
    #[error("failed to read schema source '{source_name}': {reason}")]
    Load { source_name: String, reason: String },

    /// The schema source is not valid YAML.
    #[error("schema source is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A node has the wrong type (number, nested list, empty name, ...).
    #[error("invalid export tree at '{path}': {reason}")]
    InvalidShape { path: String, reason: String },

    /// A composite node mapping does not have exactly one key.
    #[error("malformed export tree at '{path}': composite node must have exactly one key, found {keys:?}")]
    MalformedTree { path: String, keys: Vec<String> },

    /// The same entity name appears twice at one level.
    #[error("duplicate entity '{name}' at '{path}'")]
    DuplicateEntity { path: String, name: String },
}

impl SchemaError {
    /// Whether the source itself could not be read or parsed into a tree.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Load { .. } | Self::Parse(_) | Self::InvalidShape { .. }
        )
    }

    /// Whether the source parsed but violates a structural invariant.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedTree { .. } | Self::DuplicateEntity { .. })
    }
}
