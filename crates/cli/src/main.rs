mod args;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use classify::{AnalysisClient, AnalysisError, Analyzer};
use ingest::InputReader;
use std::io::IsTerminal;
use std::process::ExitCode;

use crate::args::Args;
use crate::output::Printer;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    Ok(match run(args).await? {
        Outcome::Reported => ExitCode::SUCCESS,
        Outcome::Warned => ExitCode::from(2),
    })
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Reported,
    /// The input was rejected before anything was sent
    Warned,
}

async fn run(args: Args) -> Result<Outcome> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => {
            tracing::debug!(source = "argument", "Reading snippet");
            text.clone()
        }
        (None, Some(path)) => {
            tracing::debug!(source = "file", path = %path.display(), "Reading snippet");
            InputReader::read_file(path).await?
        }
        (None, None) => {
            tracing::debug!(source = "stdin", "Reading snippet");
            InputReader::read_stdin().await?
        }
    };

    let client = AnalysisClient::new(args.endpoint.clone(), args.timeout())?;
    let analyzer = Analyzer::new(client, args.grouper_config())?;

    let report = match analyzer.analyze(&text).await {
        Ok(report) => report,
        Err(AnalysisError::EmptyInput) => {
            tracing::info!("Rejected blank input");
            eprintln!("warning: {}", AnalysisError::EmptyInput);
            return Ok(Outcome::Warned);
        }
        Err(e) => {
            tracing::debug!(endpoint = %args.endpoint, error = %e, "Analysis failed");
            return Err(e).context("Analysis failed");
        }
    };

    tracing::debug!(
        sentences = report.sentence_count,
        groups = report.groups.len(),
        "Analysis complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let color = !args.no_color && std::io::stdout().is_terminal();
        print!("{}", Printer::new(color).report(&report, !args.no_legend));
    }

    Ok(Outcome::Reported)
}
