//! Error handling module for the installer
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the installer
#[derive(Error, Debug)]
pub enum InstallerError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested name is not in the component catalog
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// A catalog component has no folder in the bundled payload
    #[error("Component {component} not found in bundled source: {}", .path.display())]
    MissingSource { component: String, path: PathBuf },

    /// Neither a framework flag nor a recognized marker file was found
    #[error("Could not determine target framework: {0}")]
    UnresolvedFramework(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Validation errors (user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization errors (catalog listing)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for installer operations
pub type Result<T> = std::result::Result<T, InstallerError>;

// Convenient error constructors
impl InstallerError {
    /// Create an unknown-component error
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent(name.into())
    }

    /// Create a missing-source error
    pub fn missing_source(component: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingSource {
            component: component.into(),
            path: path.into(),
        }
    }

    /// Create an unresolved-framework error
    pub fn unresolved_framework(msg: impl Into<String>) -> Self {
        Self::UnresolvedFramework(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InstallerError::unknown_component("Frobnicate");
        assert_eq!(err.to_string(), "Unknown component: Frobnicate");

        let err = InstallerError::unresolved_framework("no marker files found");
        assert_eq!(
            err.to_string(),
            "Could not determine target framework: no marker files found"
        );
    }

    #[test]
    fn test_missing_source_display_includes_path() {
        let err = InstallerError::missing_source("Button", "/tmp/source/components/button");
        let msg = err.to_string();
        assert!(msg.contains("Button"));
        assert!(msg.contains("/tmp/source/components/button"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InstallerError = io_err.into();
        assert!(matches!(err, InstallerError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = InstallerError::terminal("raw mode failed");
        assert!(matches!(err, InstallerError::Terminal(_)));

        let err = InstallerError::validation("empty component list");
        assert!(matches!(err, InstallerError::Validation(_)));
    }
}
