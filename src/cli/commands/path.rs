//! Path command implementation.
//!
//! Provides `pagecache path <URI>`, showing where a request is cached.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::PathArgs;
use crate::error::{PageCacheError, Result};
use crate::http::{PageRequest, PageResponse};
use crate::page_cache::PageCache;
use crate::storage::Storage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Where a URI is cached, and whether a `200` GET for it would be.
#[derive(Debug, Serialize)]
pub struct PathReport {
    /// The URI as given.
    pub uri: String,
    /// Cache file the URI maps to.
    pub file: PathBuf,
    /// Whether a `200` GET for the URI is eligible.
    pub cacheable: bool,
}

/// The path command implementation.
pub struct PathCommand<S> {
    cache: PageCache<S>,
    args: PathArgs,
}

impl<S: Storage> PathCommand<S> {
    /// Create a new path command.
    pub fn new(cache: PageCache<S>, args: PathArgs) -> Self {
        Self { cache, args }
    }

    /// Build the report for the command's URI.
    pub fn report(&self) -> Result<PathReport> {
        let request = PageRequest::get(&self.args.uri);
        let target = self
            .cache
            .target_for(&request)
            .map_err(|e| PageCacheError::InvalidUri {
                uri: self.args.uri.clone(),
                message: e.to_string(),
            })?;

        Ok(PathReport {
            uri: self.args.uri.clone(),
            file: target.file_path(),
            cacheable: self.cache.should_cache(&request, &PageResponse::ok(Vec::<u8>::new())),
        })
    }
}

impl<S: Storage> Command for PathCommand<S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report()?;

        if self.args.json {
            let output = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        ui.message(&report.file.display().to_string());
        if !report.cacheable {
            ui.warning("Requests with a query string are never cached");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn command(uri: &str, json: bool) -> PathCommand<MemoryStorage> {
        let cache = PageCache::new(MemoryStorage::new()).with_base_path("/srv/cache");
        PathCommand::new(
            cache,
            PathArgs {
                uri: uri.to_string(),
                json,
            },
        )
    }

    #[test]
    fn prints_file_for_uri() {
        let mut ui = MockUI::new();
        command("/blog/my-post", false).execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), ["/srv/cache/blog/my-post.html".to_string()]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn warns_about_query_string() {
        let mut ui = MockUI::new();
        command("/search?q=rust", false).execute(&mut ui).unwrap();

        assert!(ui.has_message("/srv/cache/search.html"));
        assert!(ui.has_warning("query string"));
    }

    #[test]
    fn report_for_trailing_slash() {
        let report = command("/blog/", false).report().unwrap();

        assert_eq!(report.file, PathBuf::from("/srv/cache/blog/__home.html"));
        assert!(report.cacheable);
    }

    #[test]
    fn json_output() {
        let mut ui = MockUI::new();
        command("/", true).execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["uri"], "/");
        assert_eq!(value["file"], "/srv/cache/__home.html");
        assert_eq!(value["cacheable"], true);
    }

    #[test]
    fn parent_segments_are_invalid() {
        let err = command("/../secret", false).report().unwrap_err();
        assert!(matches!(err, PageCacheError::InvalidUri { .. }));
    }
}
