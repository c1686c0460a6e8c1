//! Clear command implementation.
//!
//! Provides `pagecache clear`.

use crate::cli::args::ClearArgs;
use crate::error::Result;
use crate::page_cache::{BasePathSource, PageCache};
use crate::storage::Storage;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand<S> {
    cache: PageCache<S>,
    args: ClearArgs,
}

impl<S: Storage> ClearCommand<S> {
    /// Create a new clear command.
    pub fn new(cache: PageCache<S>, args: ClearArgs) -> Self {
        Self { cache, args }
    }
}

impl<S: Storage> Command for ClearCommand<S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.cache.base_path("");

        // Clearing removes the directory itself; never do that to the
        // shared temp directory.
        if self.cache.base_path_source() == BasePathSource::TempDir {
            ui.error(&format!(
                "No cache directory configured, refusing to delete {}",
                root.display()
            ));
            ui.message("Set cache_path or public_path in .pagecache.yml, or pass --cache-path");
            return Ok(CommandResult::failure(1));
        }

        if !self.args.force && ui.is_interactive() {
            let prompt = Prompt::confirm(
                "clear_cache",
                format!("Delete {} and every cached page in it?", root.display()),
                false,
            );

            if !ui.confirm(&prompt)? {
                ui.message("Cancelled");
                return Ok(CommandResult::success());
            }
        }

        if self.cache.clear()? {
            ui.success(&format!("Cleared page cache at {}", root.display()));
        } else {
            ui.message(&format!("Page cache at {} is already empty", root.display()));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{PageRequest, PageResponse};
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn warm_cache() -> PageCache<MemoryStorage> {
        let cache = PageCache::new(MemoryStorage::new()).with_base_path("/srv/cache");
        cache
            .cache(&PageRequest::get("/"), &PageResponse::ok("home"))
            .unwrap();
        cache
            .cache(&PageRequest::get("/blog/post"), &PageResponse::ok("post"))
            .unwrap();
        cache
    }

    #[test]
    fn clear_with_force_removes_pages() {
        let mut ui = MockUI::new();
        let cmd = ClearCommand::new(warm_cache(), ClearArgs { force: true });

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Cleared page cache at /srv/cache"));
        assert!(cmd.cache.storage().files().is_empty());
    }

    #[test]
    fn clear_empty_cache_reports_nothing_to_do() {
        let mut ui = MockUI::new();
        let cache = PageCache::new(MemoryStorage::new()).with_base_path("/srv/cache");
        let cmd = ClearCommand::new(cache, ClearArgs { force: true });

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("already empty"));
    }

    #[test]
    fn interactive_clear_can_be_cancelled() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("clear_cache", false);
        let cmd = ClearCommand::new(warm_cache(), ClearArgs::default());

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Cancelled"));
        assert_eq!(cmd.cache.storage().files().len(), 2);
    }

    #[test]
    fn interactive_clear_confirmed() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("clear_cache", true);
        let cmd = ClearCommand::new(warm_cache(), ClearArgs::default());

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), ["clear_cache".to_string()]);
        assert!(cmd.cache.storage().files().is_empty());
    }

    #[test]
    fn force_skips_prompt() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        let cmd = ClearCommand::new(warm_cache(), ClearArgs { force: true });

        cmd.execute(&mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert!(cmd.cache.storage().files().is_empty());
    }

    #[test]
    fn refuses_to_clear_temp_dir() {
        let mut ui = MockUI::new();
        let cmd = ClearCommand::new(PageCache::new(MemoryStorage::new()), ClearArgs { force: true });

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("refusing"));
    }
}
