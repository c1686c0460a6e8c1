//! pagecache - Static page cache for successful GET responses.
//!
//! Eligible responses (a `GET` without query string that returned `200`)
//! are written as `.html` files under a cache directory, laid out after the
//! request path, so a front-end web server can serve them without calling
//! the application.
//!
//! # Modules
//!
//! - [`page_cache`] - The cache: eligibility, path mapping, writes, clearing
//! - [`http`] - Request/response views the cache reads from
//! - [`storage`] - Filesystem backends (disk and in-memory)
//! - [`resolver`] - Named path lookups for the default cache directory
//! - [`middleware`] - Pipeline hook that isolates cache write failures
//! - [`config`] - `.pagecache.yml` loading and validation
//! - [`cli`] - Command-line interface
//! - [`ui`] - Terminal output and prompts
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use pagecache::{PageCache, PageRequest, PageResponse};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let mut cache = PageCache::on_disk();
//! cache.set_base_path(temp.path().to_str().unwrap());
//!
//! cache
//!     .cache_if_needed(&PageRequest::get("/"), &PageResponse::ok("<h1>Home</h1>"))
//!     .unwrap();
//!
//! let home = std::fs::read_to_string(temp.path().join("__home.html")).unwrap();
//! assert_eq!(home, "<h1>Home</h1>");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod page_cache;
pub mod resolver;
pub mod storage;
pub mod ui;

pub use error::{PageCacheError, Result};
pub use http::{PageRequest, PageResponse, Request, Response};
pub use middleware::CacheResponse;
pub use page_cache::{BasePathSource, CacheTarget, PageCache};
