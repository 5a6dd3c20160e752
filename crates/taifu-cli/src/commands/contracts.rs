use serde::Serialize;

use taifu_core::{ContractCatalog, FutureContract, SourceId};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ContractsResponseData {
    count: usize,
    contracts: Vec<FutureContract>,
}

pub fn run(catalog: &ContractCatalog) -> Result<CommandResult, CliError> {
    let contracts = catalog.contracts().to_vec();

    let data = serde_json::to_value(ContractsResponseData {
        count: contracts.len(),
        contracts,
    })?;

    Ok(CommandResult::ok(data, vec![SourceId::Catalog]))
}
