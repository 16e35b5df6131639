//! Command-line entry point for unwrap

use clap::Parser;
use std::process;
use unwrap_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
