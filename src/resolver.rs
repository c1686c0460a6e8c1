//! Named path lookups used to find a default cache directory.

use std::collections::HashMap;

/// Binding name for the application's public web root.
pub const PUBLIC_PATH: &str = "path.public";

/// Resolves named path bindings provided by the host application.
pub trait PathResolver: Send + Sync {
    /// Whether a binding with this name is registered.
    fn has_binding(&self, name: &str) -> bool;

    /// Resolve a registered binding.
    fn resolve_binding(&self, name: &str) -> Option<String>;
}

/// A map-backed [`PathResolver`].
///
/// # Example
///
/// ```
/// use pagecache::resolver::{Bindings, PathResolver, PUBLIC_PATH};
///
/// let bindings = Bindings::new().bind(PUBLIC_PATH, "/srv/app/public");
/// assert!(bindings.has_binding(PUBLIC_PATH));
/// assert_eq!(bindings.resolve_binding(PUBLIC_PATH).as_deref(), Some("/srv/app/public"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    paths: HashMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding, replacing any previous value.
    pub fn bind(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.paths.insert(name.into(), path.into());
        self
    }
}

impl PathResolver for Bindings {
    fn has_binding(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }

    fn resolve_binding(&self, name: &str) -> Option<String> {
        self.paths.get(name).cloned()
    }
}
