//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, PageCacheConfig};
use crate::error::Result;
use crate::storage::DiskStorage;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    cache_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// `cache_path` overrides the config file's `cache_path`.
    pub fn new(project_root: PathBuf, cache_path: Option<PathBuf>) -> Self {
        Self {
            project_root,
            cache_path,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the project config and apply command-line overrides.
    pub fn config(&self) -> Result<PageCacheConfig> {
        let mut config = load_config(&self.project_root)?;

        if let Some(path) = &self.cache_path {
            config.cache_path = Some(path.clone());
            validate(&config)?;
        }

        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Dispatch and execute a command against the on-disk cache.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cache = self.config()?.build_cache(DiskStorage::new());

        match &cli.command {
            Commands::Clear(args) => {
                let cmd = super::clear::ClearCommand::new(cache, args.clone());
                cmd.execute(ui)
            }
            Commands::Path(args) => {
                let cmd = super::path::PathCommand::new(cache, args.clone());
                cmd.execute(ui)
            }
            Commands::Store(args) => {
                let cmd = super::store::StoreCommand::new(cache, args.clone());
                cmd.execute(ui)
            }
            Commands::Info(args) => {
                let cmd = super::info::InfoCommand::new(cache, args.clone());
                cmd.execute(ui)
            }
        }
    }
}
