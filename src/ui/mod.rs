//! Command-line interface

pub mod cli;

pub use cli::{Cli, cli_to_config};
