//! Filesystem storage backend.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::Storage;

/// [`Storage`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStorage;

impl DiskStorage {
    /// Create a new disk storage backend.
    pub fn new() -> Self {
        Self
    }
}

impl Storage for DiskStorage {
    fn create_directory(
        &self,
        path: &Path,
        mode: u32,
        recursive: bool,
        force: bool,
    ) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(recursive);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        match builder.create(path) {
            Ok(()) => Ok(()),
            Err(e) if force && e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn write_file(&self, path: &Path, contents: &[u8], lock: bool) -> io::Result<()> {
        if !lock {
            return fs::write(path, contents);
        }

        // Truncate only once the lock is held so a concurrent writer never
        // sees a half-cleared file.
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        file.lock()?;
        file.set_len(0)?;
        file.write_all(contents)?;
        file.flush()?;
        file.unlock()
    }

    fn delete_directory(&self, path: &Path, preserve_root: bool) -> io::Result<bool> {
        if !path.is_dir() {
            return Ok(false);
        }

        if !preserve_root {
            fs::remove_dir_all(path)?;
            return Ok(true);
        }

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }

        Ok(true)
    }
}
