use serde::Serialize;

use taifu_ai::{AnalysisRequest, RiskAnalysis, RiskAnalyst};
use taifu_core::{CalculationResult, ContractCatalog, FutureContract, SourceId};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::margin::compute;
use super::CommandResult;

#[derive(Debug, Serialize)]
struct AnalyzeResponseData {
    contract: FutureContract,
    price: f64,
    quantity: u32,
    result: CalculationResult,
    analysis: RiskAnalysis,
}

pub async fn run(
    args: &AnalyzeArgs,
    catalog: &ContractCatalog,
    analyst: &RiskAnalyst,
) -> Result<CommandResult, CliError> {
    let (contract, input, result) = compute(catalog, &args.code, args.price, args.contracts)?;

    let request = AnalysisRequest::from_calculation(contract, &input, &result);
    let outcome = analyst.analyze(&request).await;

    // The narrative decorates the computed figures; it never alters them.
    let data = serde_json::to_value(AnalyzeResponseData {
        contract: contract.clone(),
        price: args.price,
        quantity: args.contracts,
        result,
        analysis: outcome.analysis,
    })?;

    let mut source_chain = vec![SourceId::Catalog, SourceId::Gemini];
    if outcome.source == SourceId::LocalTemplate {
        source_chain.push(SourceId::LocalTemplate);
    }

    Ok(CommandResult::ok(data, source_chain))
}
