//! Pure margin-tier arithmetic.

use crate::domain::{CalculationInput, CalculationResult, FutureContract};

/// Compute margin tiers for one validated (contract, input) pair.
///
/// Contract value is price x shares per contract x quantity; each margin
/// tier is contract value x its posted ratio; leverage is the reciprocal of
/// the initial ratio. Pure and synchronous, never fails: both arguments
/// already passed construction-time validation, which is the only gate.
pub fn calculate(contract: &FutureContract, input: &CalculationInput) -> CalculationResult {
    let contract_value =
        input.price() * f64::from(contract.shares_per_contract) * f64::from(input.quantity());

    CalculationResult {
        contract_value,
        initial_margin: contract_value * contract.ratio.initial,
        maintenance_margin: contract_value * contract.ratio.maintenance,
        settlement_margin: contract_value * contract.ratio.settlement,
        leverage: contract.ratio.leverage(),
    }
}
