//! generate-angular-config CLI
//!
//! Pulls config values out of the full blueprint config and writes them to a
//! javascript file read by Angular.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use blueprint_config::Projector;

#[derive(Parser)]
#[command(name = "generate-angular-config")]
#[command(about = "Write the Angular configuration constant from the blueprint config")]
#[command(version)]
struct Cli {
    /// Path to the blueprint config JSON file
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Where to write the javascript constant definition Angular needs
    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    debug!(input = %cli.input.display(), output = %cli.output.display(), "starting");

    let summary = Projector::default()
        .project(&cli.input, &cli.output)
        .with_context(|| format!("Failed to generate {}", cli.output.display()))?;

    debug!(entries = summary.entries, "done");
    Ok(())
}
