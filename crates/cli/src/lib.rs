//! # SearchAds CLI
//!
//! Argument parsing, logging setup, output rendering and the command
//! handlers behind the `searchads` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, LogFormat, OutputFormat};
pub use commands::{dispatch, run, Context};
pub use logging::init_logging;
