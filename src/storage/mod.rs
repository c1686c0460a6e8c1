//! Storage backends for cached pages.
//!
//! This module provides:
//! - [`Storage`] trait, the three filesystem operations the cache needs
//! - [`DiskStorage`] for real filesystem access
//! - [`MemoryStorage`], an in-memory double for tests

pub mod disk;
pub mod memory;

pub use disk::DiskStorage;
pub use memory::MemoryStorage;

use std::io;
use std::path::Path;

/// Permission bits used when creating cache directories.
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o775;

/// Filesystem capability used by [`crate::PageCache`].
///
/// Errors are plain `io::Error` so they reach the caller untranslated.
pub trait Storage {
    /// Create a directory.
    ///
    /// With `recursive`, missing parents are created too. With `force`, a
    /// directory that already exists is not an error.
    fn create_directory(&self, path: &Path, mode: u32, recursive: bool, force: bool)
        -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// With `lock`, an exclusive lock is held on the file while writing.
    fn write_file(&self, path: &Path, contents: &[u8], lock: bool) -> io::Result<()>;

    /// Recursively delete a directory.
    ///
    /// Returns `Ok(false)` if `path` is not a directory. With
    /// `preserve_root`, only the contents are removed.
    fn delete_directory(&self, path: &Path, preserve_root: bool) -> io::Result<bool>;
}
