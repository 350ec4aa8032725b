//! Error types for the documentation shell.
//!
//! The interactive core (store, router, search overlay) never fails: unknown
//! routes degrade to the home view and committing an empty result list is a
//! no-op. Errors only come from the ambient surfaces around it, namely loading
//! configuration, themes, and the search catalog from disk.

use thiserror::Error;

/// The main error type for `docshell` operations.
///
/// # Examples
///
/// ```
/// use docshell::DocsError;
///
/// fn validate_language(code: &str) -> Result<(), DocsError> {
///     Err(DocsError::Config(format!("unknown language: {code}")))
/// }
///
/// assert!(validate_language("fr").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DocsError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The search catalog could not be loaded.
    ///
    /// Carries the offending file or a description of the malformed entry.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A TOML document (config or theme) failed to parse.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A JSON document (catalog) failed to parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for `docshell` operations.
pub type Result<T> = std::result::Result<T, DocsError>;
