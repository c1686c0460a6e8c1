//! Error types for pagecache operations.
//!
//! This module defines [`PageCacheError`], the error type used by the
//! configuration and command layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The cache itself ([`crate::PageCache`]) returns `std::io::Error`
//!   straight from the storage backend, untranslated
//! - Use `PageCacheError` for configuration and CLI failures
//! - Use `anyhow::Error` (via `PageCacheError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration and command-line operations.
#[derive(Debug, Error)]
pub enum PageCacheError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A request URI that cannot be mapped to a cache file.
    #[error("Invalid request URI '{uri}': {message}")]
    InvalidUri { uri: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pagecache operations.
pub type Result<T> = std::result::Result<T, PageCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PageCacheError::ConfigNotFound {
            path: PathBuf::from("/srv/app/.pagecache.yml"),
        };
        assert!(err.to_string().contains("/srv/app/.pagecache.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PageCacheError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = PageCacheError::ConfigValidationError {
            message: "cache_path must not be empty".into(),
        };
        assert!(err.to_string().contains("cache_path must not be empty"));
    }

    #[test]
    fn invalid_uri_displays_uri_and_message() {
        let err = PageCacheError::InvalidUri {
            uri: "blog".into(),
            message: "must start with '/'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("blog"));
        assert!(msg.contains("must start with '/'"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: PageCacheError = io_err.into();
        assert!(matches!(err, PageCacheError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PageCacheError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, PageCacheError::Other(_)));
        assert_eq!(err.to_string(), "unexpected");
    }
}
