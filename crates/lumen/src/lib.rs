// ABOUTME: Library half of the lumen binary: CLI, configuration and command execution
// ABOUTME: Kept separate from main.rs so command behavior is testable without a process

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use commands::{Outcome, execute};
pub use config::Config;
