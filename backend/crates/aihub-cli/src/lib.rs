//! aihub-cli library
//!
//! Argument parsing and command execution for the `aihub` binary, exported
//! for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod runner;
pub mod session_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::execute;
pub use session_commands::SessionCommands;
