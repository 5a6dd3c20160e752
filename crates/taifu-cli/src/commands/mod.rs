mod analyze;
mod contracts;
mod margin;
mod search;

use std::time::Instant;

use serde_json::Value;
use uuid::Uuid;

use taifu_ai::{RiskAnalyst, RiskAnalystConfig};
use taifu_core::{ContractCatalog, Report, ReportMeta, SourceId};

use crate::cli::{Cli, Command};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

/// Payload and metadata produced by one command run.
#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub source_chain: Vec<SourceId>,
}

impl CommandResult {
    pub fn ok(data: Value, source_chain: Vec<SourceId>) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            source_chain,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Report<Value>, CliError> {
    let started = Instant::now();
    let catalog = ContractCatalog::taifex();
    tracing::debug!(contracts = catalog.len(), "catalog loaded");

    let command_result = match &cli.command {
        Command::Contracts => contracts::run(&catalog)?,
        Command::Search(args) => search::run(args, &catalog)?,
        Command::Margin(args) => margin::run(args, &catalog)?,
        Command::Analyze(args) => {
            let analyst =
                RiskAnalyst::new(RiskAnalystConfig::from_env().with_timeout_ms(cli.timeout_ms));
            analyze::run(args, &catalog, &analyst).await?
        }
    };

    let CommandResult {
        data,
        warnings,
        source_chain,
    } = command_result;

    let mut meta = ReportMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        source_chain,
        elapsed_ms(started),
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Report::new(meta, data))
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
