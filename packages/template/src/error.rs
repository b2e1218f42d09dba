//! Error types for the template reader.
//!
//! The content walk itself never fails: missing attributes and unknown tags
//! degrade to absent values. Errors only come from the collaborators around
//! it (reading files, parsing markup, serializing output).

use thiserror::Error;

/// Main error type for the template library.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input file exceeds the configured size limit.
    #[error("Input {path} is {size} bytes, which exceeds the limit of {limit} bytes")]
    InputTooLarge { path: String, size: u64, limit: u64 },

    /// Requested output format is not supported.
    #[error("Unsupported output format: '{0}'. Expected one of: yaml, json")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
