//! Request pipeline hook.
//!
//! [`CacheResponse`] runs after the application produced its response and
//! hands the pair to [`PageCache::cache_if_needed`]. A failed cache write is
//! logged and dropped; the response always goes back to the client.

use std::sync::Arc;

use tracing::warn;

use crate::http::{Request, Response};
use crate::page_cache::PageCache;
use crate::storage::Storage;

/// Caches eligible responses on their way out of the application.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pagecache::{CacheResponse, PageCache, PageRequest, PageResponse};
/// use pagecache::storage::MemoryStorage;
///
/// let cache = Arc::new(PageCache::new(MemoryStorage::new()).with_base_path("/srv/cache"));
/// let middleware = CacheResponse::new(Arc::clone(&cache));
///
/// let response = middleware.handle(&PageRequest::get("/about"), |_| PageResponse::ok("About"));
/// assert_eq!(response, PageResponse::ok("About"));
/// assert_eq!(cache.storage().files().len(), 1);
/// ```
pub struct CacheResponse<S> {
    cache: Arc<PageCache<S>>,
}

impl<S> Clone for CacheResponse<S> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: Storage> CacheResponse<S> {
    /// Wrap a shared cache.
    pub fn new(cache: Arc<PageCache<S>>) -> Self {
        Self { cache }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &PageCache<S> {
        &self.cache
    }

    /// Run `next` to produce the response, then cache it if eligible.
    pub fn handle<Req, Res, F>(&self, request: &Req, next: F) -> Res
    where
        Req: Request,
        Res: Response,
        F: FnOnce(&Req) -> Res,
    {
        let response = next(request);
        self.after(request, &response);
        response
    }

    /// Cache an already produced response if eligible.
    ///
    /// Returns `false` when a write was attempted and failed.
    pub fn after(&self, request: &impl Request, response: &impl Response) -> bool {
        match self.cache.cache_if_needed(request, response) {
            Ok(_) => true,
            Err(e) => {
                warn!(
                    path = request.path_info(),
                    error = %e,
                    "Failed to write page cache entry"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{PageRequest, PageResponse};
    use crate::storage::MemoryStorage;
    use std::path::Path;

    fn middleware(storage: MemoryStorage) -> CacheResponse<MemoryStorage> {
        CacheResponse::new(Arc::new(
            PageCache::new(storage).with_base_path("/srv/cache"),
        ))
    }

    #[test]
    fn handle_caches_eligible_response() {
        let mw = middleware(MemoryStorage::new());

        let response = mw.handle(&PageRequest::get("/pricing"), |req| {
            PageResponse::ok(format!("page for {}", req.path_info()))
        });

        assert_eq!(response.content(), b"page for /pricing");
        assert_eq!(
            mw.cache()
                .storage()
                .file(Path::new("/srv/cache/pricing.html"))
                .unwrap(),
            b"page for /pricing"
        );
    }

    #[test]
    fn handle_passes_through_ineligible_response() {
        let mw = middleware(MemoryStorage::new());

        let response = mw.handle(&PageRequest::new("POST", "/contact"), |_| {
            PageResponse::new(303, "")
        });

        assert_eq!(response.status_code(), 303);
        assert!(mw.cache().storage().files().is_empty());
    }

    #[test]
    fn storage_failure_still_returns_response() {
        let mw = middleware(MemoryStorage::failing());

        let response = mw.handle(&PageRequest::get("/"), |_| PageResponse::ok("home"));

        assert_eq!(response, PageResponse::ok("home"));
        assert!(!mw.after(&PageRequest::get("/"), &response));
    }

    #[test]
    fn after_reports_success() {
        let mw = middleware(MemoryStorage::new());
        assert!(mw.after(&PageRequest::get("/"), &PageResponse::ok("home")));
        assert!(mw.after(&PageRequest::get("/?utm=x"), &PageResponse::ok("home")));
        assert_eq!(mw.cache().storage().write_count(), 1);
    }

    #[test]
    fn clones_share_cache() {
        let mw = middleware(MemoryStorage::new());
        let other = mw.clone();

        other.after(&PageRequest::get("/a"), &PageResponse::ok("a"));

        assert_eq!(mw.cache().storage().files().len(), 1);
    }
}
