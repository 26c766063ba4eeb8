//! Interactive terminal front end: command loop, prompts, and terminal rendering.

pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod terminal;

pub use shell::{run_cli, SCRIPT_ENV};
