//! Configuration file discovery and loading.

use crate::config::schema::PageCacheConfig;
use crate::config::validator::validate;
use crate::error::{PageCacheError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".pagecache.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.pagecache.yml` (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PageCacheConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PageCacheError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PageCacheError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PageCacheConfig> {
    if content.trim().is_empty() {
        return Ok(PageCacheConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PageCacheError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, validate and resolve the project config.
///
/// A missing `.pagecache.yml` is not an error; the default config is
/// returned. Relative paths are resolved against `project_root`.
pub fn load_config(project_root: &Path) -> Result<PageCacheConfig> {
    let path = project_root.join(CONFIG_FILE_NAME);

    let config = match load_config_file(&path) {
        Ok(config) => config,
        Err(PageCacheError::ConfigNotFound { .. }) => {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, project_root.display());
            PageCacheConfig::default()
        }
        Err(e) => return Err(e),
    };

    validate(&config)?;
    Ok(config.resolve_relative(project_root))
}
