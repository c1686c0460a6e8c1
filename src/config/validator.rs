//! Configuration validation rules.
//!
//! - Configured paths must not be empty
//! - `cache_path` must not be a filesystem root, since clearing the cache
//!   deletes that directory

use crate::config::schema::PageCacheConfig;
use crate::error::{PageCacheError, Result};

/// Validate a configuration, stopping at the first problem.
pub fn validate(config: &PageCacheConfig) -> Result<()> {
    if let Some(path) = &config.cache_path {
        if path.as_os_str().is_empty() {
            return Err(PageCacheError::ConfigValidationError {
                message: "cache_path must not be empty".to_string(),
            });
        }

        if path.parent().is_none() {
            return Err(PageCacheError::ConfigValidationError {
                message: format!("cache_path must not be a filesystem root: {}", path.display()),
            });
        }
    }

    if let Some(path) = &config.public_path {
        if path.as_os_str().is_empty() {
            return Err(PageCacheError::ConfigValidationError {
                message: "public_path must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
