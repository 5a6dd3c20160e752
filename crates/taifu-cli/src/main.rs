mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let report = commands::run(&cli).await?;
    output::render(&report, cli.format, cli.pretty)?;

    if cli.strict && !report.meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: report.meta.warnings.len(),
        });
    }

    Ok(())
}

/// Internal diagnostics on stderr, silent unless `TAIFU_LOG` is set.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TAIFU_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
