//! In-memory storage for testing.
//!
//! `MemoryStorage` implements [`Storage`] without touching the disk and
//! exposes its contents for later assertion.
//!
//! # Example
//!
//! ```
//! use pagecache::storage::{MemoryStorage, Storage};
//! use std::path::Path;
//!
//! let storage = MemoryStorage::new();
//! storage.create_directory(Path::new("/cache/blog"), 0o775, true, true).unwrap();
//! storage.write_file(Path::new("/cache/blog/post.html"), b"<h1>Post</h1>", true).unwrap();
//!
//! assert!(storage.is_dir(Path::new("/cache")));
//! assert_eq!(storage.file(Path::new("/cache/blog/post.html")).unwrap(), b"<h1>Post</h1>");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Storage;

#[derive(Debug, Default)]
struct State {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    writes: usize,
    fail_writes: bool,
}

impl State {
    /// Filesystem roots and the empty path always exist.
    fn dir_exists(&self, path: &Path) -> bool {
        path.parent().is_none() || path.as_os_str().is_empty() || self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        path.parent().is_none_or(|parent| self.dir_exists(parent))
    }
}

/// In-memory [`Storage`] double.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage whose writes always fail with `PermissionDenied`.
    pub fn failing() -> Self {
        let storage = Self::default();
        storage.state().fail_writes = true;
        storage
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Contents of the file at `path`, if any.
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.state().files.get(path).cloned()
    }

    /// All stored file paths, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    /// Whether `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.state().directories.contains(path)
    }

    /// Number of successful file writes so far.
    pub fn write_count(&self) -> usize {
        self.state().writes
    }
}

impl Storage for MemoryStorage {
    fn create_directory(
        &self,
        path: &Path,
        _mode: u32,
        recursive: bool,
        force: bool,
    ) -> io::Result<()> {
        let mut state = self.state();

        if state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }

        if state.dir_exists(path) {
            return if force || recursive {
                Ok(())
            } else {
                Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", path.display()),
                ))
            };
        }

        if !recursive && !state.parent_exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            ));
        }

        for ancestor in path.ancestors() {
            if ancestor.parent().is_none() || ancestor.as_os_str().is_empty() {
                break;
            }
            state.directories.insert(ancestor.to_path_buf());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8], _lock: bool) -> io::Result<()> {
        let mut state = self.state();

        if state.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot write {}", path.display()),
            ));
        }

        if !state.parent_exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            ));
        }

        if state.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        state.writes += 1;
        Ok(())
    }

    fn delete_directory(&self, path: &Path, preserve_root: bool) -> io::Result<bool> {
        let mut state = self.state();

        if !state.directories.contains(path) {
            return Ok(false);
        }

        state.directories.retain(|dir| !dir.starts_with(path));
        state.files.retain(|file, _| !file.starts_with(path));

        if preserve_root {
            state.directories.insert(path.to_path_buf());
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recursive_create_registers_ancestors() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv/cache/blog"), 0o775, true, true)
            .unwrap();

        assert!(storage.is_dir(Path::new("/srv")));
        assert!(storage.is_dir(Path::new("/srv/cache")));
        assert!(storage.is_dir(Path::new("/srv/cache/blog")));
    }

    #[test]
    fn trailing_separator_names_same_directory() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv/cache/blog/"), 0o775, true, true)
            .unwrap();

        assert!(storage.is_dir(Path::new("/srv/cache/blog")));
    }

    #[test]
    fn non_recursive_create_needs_parent() {
        let storage = MemoryStorage::new();
        let err = storage
            .create_directory(Path::new("/srv/cache"), 0o775, false, true)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn existing_directory_without_force_fails() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv"), 0o775, false, false)
            .unwrap();
        let err = storage
            .create_directory(Path::new("/srv"), 0o775, false, false)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn write_requires_parent_directory() {
        let storage = MemoryStorage::new();
        let err = storage
            .write_file(Path::new("/srv/index.html"), b"x", true)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn write_overwrites_and_counts() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv"), 0o775, true, true)
            .unwrap();
        storage
            .write_file(Path::new("/srv/index.html"), b"one", true)
            .unwrap();
        storage
            .write_file(Path::new("/srv/index.html"), b"two", true)
            .unwrap();

        assert_eq!(storage.file(Path::new("/srv/index.html")).unwrap(), b"two");
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn failing_storage_rejects_writes() {
        let storage = MemoryStorage::failing();
        storage
            .create_directory(Path::new("/srv"), 0o775, true, true)
            .unwrap();
        let err = storage
            .write_file(Path::new("/srv/index.html"), b"x", true)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn delete_removes_subtree_only() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv/cache/blog"), 0o775, true, true)
            .unwrap();
        storage
            .create_directory(Path::new("/srv/cache-other"), 0o775, true, true)
            .unwrap();
        storage
            .write_file(Path::new("/srv/cache/blog/post.html"), b"x", true)
            .unwrap();
        storage
            .write_file(Path::new("/srv/cache-other/keep.html"), b"y", true)
            .unwrap();

        assert!(storage
            .delete_directory(Path::new("/srv/cache"), false)
            .unwrap());

        assert!(!storage.is_dir(Path::new("/srv/cache")));
        assert!(storage.is_dir(Path::new("/srv")));
        assert_eq!(
            storage.files(),
            vec![PathBuf::from("/srv/cache-other/keep.html")]
        );
    }

    #[test]
    fn delete_preserving_root_keeps_directory() {
        let storage = MemoryStorage::new();
        storage
            .create_directory(Path::new("/srv/cache/blog"), 0o775, true, true)
            .unwrap();

        assert!(storage
            .delete_directory(Path::new("/srv/cache"), true)
            .unwrap());

        assert!(storage.is_dir(Path::new("/srv/cache")));
        assert!(!storage.is_dir(Path::new("/srv/cache/blog")));
    }

    #[test]
    fn delete_missing_directory_returns_false() {
        let storage = MemoryStorage::new();
        assert!(!storage
            .delete_directory(Path::new("/nowhere"), false)
            .unwrap());
    }
}
