//! Configuration loading and validation for pagecache.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pagecache::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pagecache.yml"), "cache_path: public/page-cache").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.cache_path, Some(temp.path().join("public/page-cache")));
//! ```
//!
//! # Configuration File
//!
//! `.pagecache.yml` lives in the project root. Relative paths in it are
//! resolved against that root.
//!
//! ```yaml
//! # Where cached pages are written. Takes precedence over public_path.
//! cache_path: /srv/app/public/page-cache
//! # Web root; pages go to <public_path>/page-cache when cache_path is unset.
//! public_path: /srv/app/public
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_root, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::PageCacheConfig;
pub use validator::validate;
