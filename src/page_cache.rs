//! The page cache.
//!
//! [`PageCache`] decides whether a finished request/response pair may be
//! stored, maps the request path to an `.html` file under the cache
//! directory, and writes the body there so a front-end server can serve it
//! without reaching the application.
//!
//! # Path mapping
//!
//! The request path is split on `/`. The last segment becomes the file name
//! (`__home` when empty) with an `.html` extension; the other segments
//! become directories:
//!
//! | Request path     | Cache file                    |
//! |------------------|-------------------------------|
//! | `/`              | `<base>/__home.html`          |
//! | `/blog`          | `<base>/blog.html`            |
//! | `/blog/`         | `<base>/blog/__home.html`     |
//! | `/blog/my-post`  | `<base>/blog/my-post.html`    |
//!
//! # Concurrency
//!
//! There is no coordination between writers: two requests for the same path
//! race and the last write wins. A `clear()` running alongside `cache()` may
//! leave a freshly written file in a directory that is being removed.
//! Configure the base path and resolver before sharing the cache between
//! threads; changing them afterwards is unsupported.

use std::fmt;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::http::{Request, Response, METHOD_GET, STATUS_OK};
use crate::resolver::{PathResolver, PUBLIC_PATH};
use crate::storage::{DiskStorage, Storage, DEFAULT_DIRECTORY_MODE};

/// Directory created under the public path when no base path is set.
pub const DEFAULT_DIRECTORY_NAME: &str = "page-cache";

/// File stem used when the last path segment is empty.
pub const HOME_ALIAS: &str = "__home";

/// Extension of every cached page.
pub const FILE_EXTENSION: &str = "html";

/// Where the cache directory was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePathSource {
    /// Set explicitly with [`PageCache::set_base_path`].
    Override,
    /// Derived from the resolver's public path binding.
    PublicPath,
    /// Nothing configured; the system temp directory.
    TempDir,
}

impl fmt::Display for BasePathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "configured path"),
            Self::PublicPath => write!(f, "public path"),
            Self::TempDir => write!(f, "system temp directory"),
        }
    }
}

/// Directory and file name a request is cached under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTarget {
    /// Directory holding the file, with a trailing separator when nested.
    pub directory: PathBuf,
    /// File name including the `.html` extension.
    pub file_name: String,
}

impl CacheTarget {
    /// Full path of the cache file.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Static page cache over a [`Storage`] backend.
///
/// # Example
///
/// ```
/// use pagecache::{PageCache, PageRequest, PageResponse};
/// use pagecache::storage::MemoryStorage;
/// use std::path::Path;
///
/// let mut cache = PageCache::new(MemoryStorage::new());
/// cache.set_base_path("/srv/app/public/page-cache/");
///
/// let request = PageRequest::get("/blog/my-post");
/// let response = PageResponse::ok("<h1>My post</h1>");
/// cache.cache_if_needed(&request, &response).unwrap();
///
/// let file = Path::new("/srv/app/public/page-cache/blog/my-post.html");
/// assert_eq!(cache.storage().file(file).unwrap(), b"<h1>My post</h1>");
/// ```
pub struct PageCache<S = DiskStorage> {
    storage: S,
    base_path: Option<PathBuf>,
    resolver: Option<Box<dyn PathResolver>>,
}

impl PageCache<DiskStorage> {
    /// Create a cache that writes to the local filesystem.
    pub fn on_disk() -> Self {
        Self::new(DiskStorage::new())
    }
}

impl<S: Storage> PageCache<S> {
    /// Create a cache over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            base_path: None,
            resolver: None,
        }
    }

    /// Builder form of [`set_base_path`](Self::set_base_path).
    pub fn with_base_path(mut self, path: impl AsRef<str>) -> Self {
        self.set_base_path(path);
        self
    }

    /// Builder form of [`set_resolver`](Self::set_resolver).
    pub fn with_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.set_resolver(resolver);
        self
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Set the cache directory, trimming trailing `/` and `\`.
    ///
    /// A path that trims to nothing clears the override.
    pub fn set_base_path(&mut self, path: impl AsRef<str>) {
        let trimmed = path.as_ref().trim_end_matches(['/', '\\']);
        self.base_path = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
    }

    /// Set the resolver consulted for a default cache directory.
    pub fn set_resolver(&mut self, resolver: impl PathResolver + 'static) {
        self.resolver = Some(Box::new(resolver));
    }

    /// The cache directory, optionally extended by `sub_path`.
    ///
    /// A non-empty `sub_path` is trimmed of surrounding slashes and the
    /// result ends with a separator.
    pub fn base_path(&self, sub_path: &str) -> PathBuf {
        let (base, _) = self.resolve_base();
        let sub_path = sub_path.trim_matches('/');

        if sub_path.is_empty() {
            base
        } else {
            base.join(sub_path).join("")
        }
    }

    /// Where [`base_path`](Self::base_path) currently comes from.
    pub fn base_path_source(&self) -> BasePathSource {
        self.resolve_base().1
    }

    /// `<public path>/page-cache`, if the resolver knows the public path.
    pub fn default_base_path(&self) -> Option<PathBuf> {
        let resolver = self.resolver.as_ref()?;
        if !resolver.has_binding(PUBLIC_PATH) {
            return None;
        }

        resolver
            .resolve_binding(PUBLIC_PATH)
            .map(|public| PathBuf::from(public).join(DEFAULT_DIRECTORY_NAME))
    }

    fn resolve_base(&self) -> (PathBuf, BasePathSource) {
        if let Some(path) = &self.base_path {
            return (path.clone(), BasePathSource::Override);
        }

        match self.default_base_path() {
            Some(path) => (path, BasePathSource::PublicPath),
            None => (std::env::temp_dir(), BasePathSource::TempDir),
        }
    }

    /// Whether the pair is eligible: a `GET` without query string that
    /// produced exactly `200`.
    pub fn should_cache(&self, request: &impl Request, response: &impl Response) -> bool {
        if request.method() != METHOD_GET {
            debug!(method = request.method(), "Skipping non-GET request");
            return false;
        }

        if request.query_string().is_some_and(|q| !q.is_empty()) {
            debug!(path = request.path_info(), "Skipping request with query string");
            return false;
        }

        if response.status_code() != STATUS_OK {
            debug!(
                path = request.path_info(),
                status = response.status_code(),
                "Skipping non-200 response"
            );
            return false;
        }

        true
    }

    /// Cache the response if [`should_cache`](Self::should_cache) allows it.
    pub fn cache_if_needed(
        &self,
        request: &impl Request,
        response: &impl Response,
    ) -> io::Result<&Self> {
        if self.should_cache(request, response) {
            self.cache(request, response)?;
        }

        Ok(self)
    }

    /// Write the response body to the request's cache file, unconditionally.
    ///
    /// Storage errors are returned as-is.
    pub fn cache(&self, request: &impl Request, response: &impl Response) -> io::Result<()> {
        let target = self.target_for(request)?;

        self.storage
            .create_directory(&target.directory, DEFAULT_DIRECTORY_MODE, true, true)?;

        let file = target.file_path();
        self.storage.write_file(&file, response.content(), true)?;

        debug!(
            path = request.path_info(),
            file = %file.display(),
            bytes = response.content().len(),
            "Cached page"
        );
        Ok(())
    }

    /// Delete the whole cache directory, including the directory itself.
    ///
    /// Returns `Ok(false)` when there was no directory to delete.
    pub fn clear(&self) -> io::Result<bool> {
        let root = self.base_path("");
        let removed = self.storage.delete_directory(&root, false)?;

        info!(path = %root.display(), removed, "Cleared page cache");
        Ok(removed)
    }

    /// Directory and file name the request maps to.
    ///
    /// Fails with `InvalidInput` for paths containing a `..` segment, which
    /// would escape the cache directory.
    pub fn target_for(&self, request: &impl Request) -> io::Result<CacheTarget> {
        let path = request.path_info();
        let path = path.strip_prefix('/').unwrap_or(path);

        let mut segments: Vec<&str> = path.split('/').collect();
        if segments.contains(&"..") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to cache path with '..' segment: {}", request.path_info()),
            ));
        }

        let leaf = segments.pop().unwrap_or_default();
        let file_name = format!("{}.{}", alias_filename(leaf), FILE_EXTENSION);

        Ok(CacheTarget {
            directory: self.base_path(&segments.join("/")),
            file_name,
        })
    }
}

impl<S: fmt::Debug> fmt::Debug for PageCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("storage", &self.storage)
            .field("base_path", &self.base_path)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

fn alias_filename(leaf: &str) -> &str {
    if leaf.is_empty() {
        HOME_ALIAS
    } else {
        leaf
    }
}
