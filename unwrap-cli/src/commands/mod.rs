//! CLI command implementations

use clap::Parser;

pub mod process;

pub use process::ProcessArgs;

/// Rejoin hard-wrapped lines of plain text into paragraphs
#[derive(Debug, Parser)]
#[command(name = "unwrap", version, about, long_about = None)]
pub struct Cli {
    /// Processing arguments
    #[command(flatten)]
    pub args: ProcessArgs,
}

impl Cli {
    /// Run the command described by the parsed arguments
    pub fn execute(&self) -> anyhow::Result<()> {
        self.args.execute()
    }
}
