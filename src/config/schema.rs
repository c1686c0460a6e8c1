//! Configuration schema for `.pagecache.yml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::page_cache::PageCache;
use crate::resolver::{Bindings, PUBLIC_PATH};
use crate::storage::Storage;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageCacheConfig {
    /// Directory cached pages are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<PathBuf>,

    /// Application web root, used for the default cache directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<PathBuf>,
}

impl PageCacheConfig {
    /// Make relative paths absolute against `root`.
    pub fn resolve_relative(mut self, root: &Path) -> Self {
        let absolutize = |path: PathBuf| {
            if path.is_relative() {
                root.join(path)
            } else {
                path
            }
        };

        self.cache_path = self.cache_path.map(absolutize);
        self.public_path = self.public_path.map(absolutize);
        self
    }

    /// Build a cache over `storage` configured from these settings.
    pub fn build_cache<S: Storage>(&self, storage: S) -> PageCache<S> {
        let mut cache = PageCache::new(storage);

        if let Some(public) = &self.public_path {
            cache.set_resolver(Bindings::new().bind(PUBLIC_PATH, public.to_string_lossy()));
        }

        if let Some(path) = &self.cache_path {
            cache.set_base_path(path.to_string_lossy());
        }

        cache
    }
}
