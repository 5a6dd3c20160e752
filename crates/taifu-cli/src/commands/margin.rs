use serde::Serialize;

use taifu_core::{
    margin, CalculationInput, CalculationResult, ContractCatalog, FutureContract, SourceId,
};

use crate::cli::MarginArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MarginResponseData {
    contract: FutureContract,
    price: f64,
    quantity: u32,
    result: CalculationResult,
}

pub fn run(args: &MarginArgs, catalog: &ContractCatalog) -> Result<CommandResult, CliError> {
    let (contract, _, result) = compute(catalog, &args.code, args.price, args.contracts)?;

    let data = serde_json::to_value(MarginResponseData {
        contract: contract.clone(),
        price: args.price,
        quantity: args.contracts,
        result,
    })?;

    Ok(CommandResult::ok(data, vec![SourceId::Catalog]))
}

/// Shared precondition gate for `margin` and `analyze`: validate the input,
/// then resolve the contract. Either failure suppresses the computation.
pub(super) fn compute<'a>(
    catalog: &'a ContractCatalog,
    code: &str,
    price: f64,
    quantity: u32,
) -> Result<(&'a FutureContract, CalculationInput, CalculationResult), CliError> {
    let input = CalculationInput::new(price, quantity)?;

    let contract = catalog
        .find_by_code(code)
        .ok_or_else(|| CliError::Command(format!("unknown futures code '{code}'")))?;

    Ok((contract, input, margin::calculate(contract, &input)))
}
