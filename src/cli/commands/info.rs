//! Info command implementation.
//!
//! Provides `pagecache info`.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::page_cache::{BasePathSource, PageCache};
use crate::storage::Storage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct InfoReport {
    cache_path: PathBuf,
    source: BasePathSource,
}

/// The info command implementation.
pub struct InfoCommand<S> {
    cache: PageCache<S>,
    args: InfoArgs,
}

impl<S: Storage> InfoCommand<S> {
    /// Create a new info command.
    pub fn new(cache: PageCache<S>, args: InfoArgs) -> Self {
        Self { cache, args }
    }
}

impl<S: Storage> Command for InfoCommand<S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = InfoReport {
            cache_path: self.cache.base_path(""),
            source: self.cache.base_path_source(),
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Cache directory: {}", report.cache_path.display()));
        ui.message(&format!("Source: {}", report.source));

        if report.source == BasePathSource::TempDir {
            ui.warning("No cache directory configured; pages go to the system temp directory");
        }

        Ok(CommandResult::success())
    }
}
