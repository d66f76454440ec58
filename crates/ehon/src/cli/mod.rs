//! CLI layer: command definitions and handlers.

mod commands;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::{list_options, run_generate};
