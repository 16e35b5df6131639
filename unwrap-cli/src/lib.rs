//! unwrap CLI library
//!
//! This library provides the command-line interface for rejoining
//! hard-wrapped text files into paragraphs.

pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
