//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! generic over the cache's [`Storage`](crate::storage::Storage) so tests
//! can run them against memory storage.

pub mod clear;
pub mod dispatcher;
pub mod info;
pub mod path;
pub mod store;

pub use clear::ClearCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use info::InfoCommand;
pub use path::PathCommand;
pub use store::StoreCommand;
