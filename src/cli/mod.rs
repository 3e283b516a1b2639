//! Command-line interface for sitegen.

pub mod errors;

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use crate::generation::DEFAULT_MODEL;

/// Generate a static HTML page from a natural-language description.
#[derive(Parser, Debug)]
#[command(name = "sitegen", version, about)]
pub struct Cli {
    /// Description of the website you want to generate
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub prompt: String,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Completion model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Abort the request after this many seconds (no limit by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Default log filter for the requested verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "sitegen=info",
            _ => "sitegen=debug",
        }
    }
}
