//! CLI layer: argument parsing, dispatch, and terminal presentation

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod shop;
pub mod view;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
