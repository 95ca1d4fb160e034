use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Check a news snippet against the fake news classifier
#[derive(Debug, Parser)]
#[command(name = "fnd", version, about)]
pub struct Args {
    /// Text to analyze. Read from stdin when neither TEXT nor --file is given
    pub text: Option<String>,

    /// Read the snippet from a .txt or .md file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Sentences per classification request unit
    #[arg(short, long, env = "FND_GROUP_SIZE", default_value_t = ingest::DEFAULT_GROUP_SIZE,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub group_size: usize,

    /// Classifier endpoint
    #[arg(long, env = "FND_ENDPOINT", default_value = classify::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "FND_TIMEOUT_SECS", default_value_t = classify::DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not print the color legend
    #[arg(long)]
    pub no_legend: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn grouper_config(&self) -> ingest::GrouperConfig {
        ingest::GrouperConfig {
            group_size: self.group_size,
        }
    }
}
