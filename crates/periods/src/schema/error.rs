//! Error type for declaration decoding and loading.

use std::path::PathBuf;

/// Errors that can occur while decoding or loading period declarations.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse/deserialization error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The `type` tag names no known period kind.
    #[error("unknown period type: {0}")]
    UnknownType(String),

    /// A declaration entry failed to decode into its concrete period.
    #[error("invalid {kind} period at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        kind: super::PeriodKind,
        #[source]
        source: serde_json::Error,
    },

    /// A standalone period failed to decode into its concrete variant.
    #[error("invalid {kind} period: {source}")]
    InvalidPeriod {
        kind: super::PeriodKind,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported declaration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result alias for declaration operations.
pub type Result<T> = std::result::Result<T, DeclarationError>;
