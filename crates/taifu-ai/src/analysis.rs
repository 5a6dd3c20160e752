use serde::{Deserialize, Serialize};

use taifu_core::{CalculationInput, CalculationResult, FutureContract};

/// Three-section risk narrative attached to one margin estimate.
///
/// The camelCase wire form matches the response schema pinned on every
/// generation request, so an upstream narrative and the local fallback are
/// indistinguishable in shape to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    /// How the leverage multiple amplifies underlying moves.
    pub leverage_risk: String,
    /// Adverse-move territory where maintenance margin gets breached.
    pub margin_call_risk: String,
    /// Capital management or stop-loss advice for this contract.
    pub recommendation: String,
}

/// Parameters embedded in one narrative request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub contract_name: String,
    pub stock_code: String,
    pub leverage: f64,
    /// Initial margin requirement in TWD.
    pub margin_requirement: f64,
    /// Underlying share price in TWD.
    pub price: f64,
}

impl AnalysisRequest {
    /// Assemble prompt parameters from a computed margin estimate.
    ///
    /// The narrative request only reads figures already computed; nothing
    /// here can feed back into the calculator's numbers.
    pub fn from_calculation(
        contract: &FutureContract,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Self {
        Self {
            contract_name: contract.name.clone(),
            stock_code: contract.stock_code.as_str().to_owned(),
            leverage: result.leverage,
            margin_requirement: result.initial_margin,
            price: input.price(),
        }
    }
}
