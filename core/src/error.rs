//! Error types for interface model construction and loading.
//!
//! Argument classification itself never fails; every error here is raised
//! while building or loading configuration.

use thiserror::Error;

use crate::Variant;

/// Errors raised while constructing option descriptions or loading a
/// program interface model.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The option name cannot be spelled with the given variant.
    #[error("invalid option name {name:?} for variant {variant:?}")]
    InvalidOptionName { variant: Variant, name: String },

    /// An option description declares no match models.
    #[error("option description {0:?} has no match models")]
    EmptyDescription(String),

    /// Two match models declare the same variant and name.
    #[error("duplicate option declaration: {0}")]
    DuplicateOption(String),

    /// A scheme was referenced by a name no default scheme has.
    #[error("unknown option scheme: {0}")]
    UnknownScheme(String),

    /// A match pattern failed to compile.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;
