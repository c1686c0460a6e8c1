//! Store command implementation.
//!
//! Provides `pagecache store <URI>`, used to warm the cache with a page
//! rendered elsewhere.

use std::fs;
use std::io::Read;

use crate::cli::args::StoreArgs;
use crate::error::{PageCacheError, Result};
use crate::http::{PageRequest, PageResponse, Request};
use crate::page_cache::PageCache;
use crate::storage::Storage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The store command implementation.
pub struct StoreCommand<S> {
    cache: PageCache<S>,
    args: StoreArgs,
}

impl<S: Storage> StoreCommand<S> {
    /// Create a new store command.
    pub fn new(cache: PageCache<S>, args: StoreArgs) -> Self {
        Self { cache, args }
    }

    fn read_body(&self) -> Result<Vec<u8>> {
        match &self.args.input {
            Some(path) => fs::read(path).map_err(|e| {
                PageCacheError::Other(
                    anyhow::Error::new(e).context(format!("Failed to read {}", path.display())),
                )
            }),
            None => {
                let mut body = Vec::new();
                std::io::stdin().read_to_end(&mut body)?;
                Ok(body)
            }
        }
    }
}

impl<S: Storage> Command for StoreCommand<S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = PageRequest::get(&self.args.uri);
        let target = self
            .cache
            .target_for(&request)
            .map_err(|e| PageCacheError::InvalidUri {
                uri: self.args.uri.clone(),
                message: e.to_string(),
            })?;

        if request.query_string().is_some() {
            ui.warning("Query string ignored; the page is stored under its path only");
        }

        let body = self.read_body()?;
        self.cache.cache(&request, &PageResponse::ok(body.as_slice()))?;

        ui.success(&format!(
            "Cached {} ({} bytes) at {}",
            request.path_info(),
            body.len(),
            target.file_path().display()
        ));
        Ok(CommandResult::success())
    }
}
