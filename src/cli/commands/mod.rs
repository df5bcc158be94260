//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that need designs share
//! [`Workspace`], which loads the config and builds the registry.

pub mod check;
pub mod config;
pub mod dispatcher;
pub mod list;
pub mod preview;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::{block_on, Workspace};
