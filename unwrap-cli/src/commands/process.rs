//! Process command implementation

use crate::config::CliConfig;
use crate::encoding;
use crate::input::FileReader;
use crate::output::{self, OutputFormat, Summary};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use unwrap_core::{Joiner, JoinerConfig, MetricPolicy, Paragraph, Stats};

/// Arguments for unwrapping a file
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format [default: txt]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Character encoding of input and output [default: utf-8]
    #[arg(short, long, value_name = "LABEL", env = "UNWRAP_ENCODING")]
    pub encoding: Option<String>,

    /// Print line statistics after processing
    #[arg(short, long)]
    pub stats: bool,

    /// Total number of passes over the input [default: 2]
    #[arg(
        short,
        long,
        value_name = "N",
        env = "UNWRAP_ITERATIONS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: Option<u32>,

    /// Rebuild line statistics on every pass instead of accumulating them
    #[arg(long)]
    pub fresh_stats: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting paragraph reconstruction");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let label = self.encoding.as_deref().unwrap_or(&config.output.encoding);
        let encoding = encoding::resolve(label)?;
        let passes = self
            .iterations
            .map(|n| n as usize)
            .unwrap_or(config.processing.iterations);
        let policy = if self.fresh_stats {
            MetricPolicy::PerPass
        } else {
            config.processing.metric_policy
        };
        let format = self.format.unwrap_or(config.output.format);
        let joiner_config = config.joiner_config(policy)?;

        let text = FileReader::read_text(&self.input, encoding)?;
        let lines = FileReader::split_lines(&text);
        log::info!(
            "Read {} lines from {} ({})",
            lines.len(),
            self.input.display(),
            encoding.name()
        );

        let (paragraphs, stats) = self.run_passes(&lines, joiner_config, passes);

        let rendered = output::render(&paragraphs, format, &config.output.uncertain_marker)?;
        let bytes = encoding::encode(&rendered, encoding)?;
        self.write_output(&bytes)?;

        if self.stats {
            let summary = Summary::new(lines.len(), &paragraphs, stats);
            if self.output.is_some() {
                println!("{summary}");
            } else {
                eprintln!("{summary}");
            }
        }

        log::info!("Wrote {} paragraphs", paragraphs.len());
        Ok(())
    }

    /// Warm up the statistics and collect the paragraphs of the final pass
    fn run_passes(
        &self,
        lines: &[&str],
        config: JoinerConfig,
        passes: usize,
    ) -> (Vec<Paragraph>, Stats) {
        let passes = passes.max(1);
        let show_progress = !self.quiet && passes > 1 && io::stderr().is_terminal();

        let mut progress = ProgressReporter::new(!show_progress);
        progress.init_passes(passes as u64);

        let mut joiner = Joiner::with_config(lines, config);
        for pass in 1..passes {
            joiner.iterate(1);
            progress.pass_completed(pass as u64);
        }

        let paragraphs: Vec<Paragraph> = joiner.paragraphs().collect();
        progress.pass_completed(passes as u64);
        progress.finish();

        (paragraphs, joiner.stats())
    }

    fn write_output(&self, bytes: &[u8]) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, bytes)
                .with_context(|| format!("Failed to write output file: {}", path.display())),
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(bytes)
                    .and_then(|()| stdout.flush())
                    .context("Failed to write to stdout")
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
