//! CLI module
//!
//! Command handlers and argument definitions for the `predecir` binary.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, InfoArgs, ServeArgs, TrainArgs};
pub use commands::run_command;
pub use logging::LogLevel;
