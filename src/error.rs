//! Router error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::compiler::CompileDiagnostics;

/// Errors surfaced by scanning, compilation and configuration loading
#[derive(Debug, Error)]
pub enum RouterError {
    /// The scan root directory does not exist.
    #[error("scan root `{0}` does not exist")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// A single declaration failed structural validation.
    #[error("invalid route declaration")]
    Validation(#[from] ValidationError),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(CompileDiagnostics),
}

/// Structural validation failures for a single route declaration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route pattern must not be empty")]
    EmptyPattern,

    #[error("route pattern `{pattern}` is not a valid regex: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("a declaration cannot be both an error route and a middleware route")]
    ErrorMiddlewareConflict,

    #[error("the `any` middleware phase is only valid on CLI command declarations")]
    AnyPhaseOutsideCli,

    #[error("CLI group name must not be empty")]
    EmptyGroup,

    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),

    #[error("`{0}` is not a valid callback reference (expected `Class::method`)")]
    InvalidCallback(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_router_error_display() {
        let not_found = RouterError::NotFound(PathBuf::from("app/controllers"));
        assert!(format!("{not_found}").contains("app/controllers"));

        let io_err = RouterError::Io(
            PathBuf::from("waypost.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("waypost.toml"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidMethod("G E T".to_string());
        assert!(format!("{err}").contains("G E T"));

        let err = ValidationError::InvalidPattern {
            pattern: "([".to_string(),
            message: "unclosed group".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("(["));
        assert!(display.contains("unclosed group"));
    }
}
