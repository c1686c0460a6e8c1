//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pagecache - Static page cache for successful GET responses.
#[derive(Debug, Parser)]
#[command(name = "pagecache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Cache directory (overrides cache_path from .pagecache.yml)
    #[arg(long, global = true, env = "PAGECACHE_PATH")]
    pub cache_path: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete the cache directory and every cached page
    Clear(ClearArgs),

    /// Show the cache file a request URI maps to
    Path(PathArgs),

    /// Cache a page body for a URI, regardless of eligibility
    Store(StoreArgs),

    /// Show the resolved cache directory
    Info(InfoArgs),
}

/// Arguments for the `clear` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ClearArgs {
    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `path` command.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Request URI, e.g. /blog/my-post
    pub uri: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `store` command.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Request URI, e.g. /blog/my-post
    pub uri: String,

    /// Read the page body from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
