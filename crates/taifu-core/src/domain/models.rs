use serde::{Deserialize, Serialize};

use crate::domain::codes::{FuturesCode, StockCode};
use crate::ValidationError;

/// Margin requirement ratios for one contract, expressed as fractions of
/// contract value.
///
/// TAIFEX posts the three tiers as settlement / maintenance / initial. Each
/// field is validated into `(0, 1]`; relative ordering between tiers is the
/// exchange's business and is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginRatio {
    pub settlement: f64,
    pub maintenance: f64,
    pub initial: f64,
}

impl MarginRatio {
    pub fn new(settlement: f64, maintenance: f64, initial: f64) -> Result<Self, ValidationError> {
        validate_ratio("settlement", settlement)?;
        validate_ratio("maintenance", maintenance)?;
        validate_ratio("initial", initial)?;

        Ok(Self {
            settlement,
            maintenance,
            initial,
        })
    }

    /// Price exposure per unit of posted initial margin.
    ///
    /// Always well-defined: `initial > 0` is a construction invariant, so the
    /// division cannot blow up at runtime.
    pub fn leverage(&self) -> f64 {
        1.0 / self.initial
    }
}

/// One tradable TAIFEX single-stock futures product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureContract {
    pub code: FuturesCode,
    /// Product name as listed by the exchange, in Traditional Chinese.
    pub name: String,
    pub stock_code: StockCode,
    /// Underlying shares represented by one contract (2000 for standard
    /// contracts, 100 for minis).
    pub shares_per_contract: u32,
    pub ratio: MarginRatio,
}

impl FutureContract {
    pub fn new(
        code: FuturesCode,
        name: impl Into<String>,
        stock_code: StockCode,
        shares_per_contract: u32,
        ratio: MarginRatio,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyContractName);
        }
        if shares_per_contract == 0 {
            return Err(ValidationError::ZeroSharesPerContract);
        }

        Ok(Self {
            code,
            name,
            stock_code,
            shares_per_contract,
            ratio,
        })
    }
}

/// Validated price/quantity pair for one margin estimate.
///
/// Construction is the precondition gate for the calculator: a price must be
/// finite and positive and a quantity at least one contract, so downstream
/// math never sees empty or malformed user input. Fields are private to keep
/// unvalidated values unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    price: f64,
    quantity: u32,
}

impl CalculationInput {
    pub fn new(price: f64, quantity: u32) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { value: price });
        }
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }

        Ok(Self { price, quantity })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Margin tiers and exposure figures computed for one (contract, input) pair.
///
/// Values are raw `f64` products; display rounding is the presenter's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Notional value: price x shares per contract x quantity.
    pub contract_value: f64,
    pub initial_margin: f64,
    pub maintenance_margin: f64,
    pub settlement_margin: f64,
    /// Reciprocal of the initial ratio; independent of price and quantity.
    pub leverage: f64,
}

fn validate_ratio(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteRatio { field });
    }
    if value <= 0.0 || value > 1.0 {
        return Err(ValidationError::RatioOutOfRange { field, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio() -> MarginRatio {
        MarginRatio::new(0.10, 0.1035, 0.135).expect("ratio should validate")
    }

    #[test]
    fn margin_ratio_accepts_posted_levels() {
        let ratio = ratio();
        assert_eq!(ratio.initial, 0.135);
        assert_eq!(ratio.maintenance, 0.1035);
        assert_eq!(ratio.settlement, 0.10);
    }

    #[test]
    fn margin_ratio_rejects_zero_and_above_one() {
        let err = MarginRatio::new(0.10, 0.1035, 0.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::RatioOutOfRange {
                field: "initial",
                ..
            }
        ));

        let err = MarginRatio::new(1.5, 0.1035, 0.135).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::RatioOutOfRange {
                field: "settlement",
                ..
            }
        ));
    }

    #[test]
    fn margin_ratio_rejects_non_finite() {
        let err = MarginRatio::new(0.10, f64::NAN, 0.135).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteRatio {
                field: "maintenance"
            }
        ));
    }

    #[test]
    fn leverage_is_reciprocal_of_initial() {
        let leverage = ratio().leverage();
        assert!((leverage - 1.0 / 0.135).abs() < 1e-12);
    }

    #[test]
    fn contract_rejects_blank_name_and_zero_shares() {
        let code = FuturesCode::parse("CDF").expect("code should parse");
        let stock = StockCode::parse("2330").expect("code should parse");

        let err = FutureContract::new(code.clone(), "  ", stock.clone(), 2000, ratio())
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyContractName));

        let err =
            FutureContract::new(code, "台積電期貨", stock, 0, ratio()).expect_err("must fail");
        assert!(matches!(err, ValidationError::ZeroSharesPerContract));
    }

    #[test]
    fn input_rejects_bad_price_and_quantity() {
        assert!(matches!(
            CalculationInput::new(f64::NAN, 1),
            Err(ValidationError::NonFinitePrice)
        ));
        assert!(matches!(
            CalculationInput::new(0.0, 1),
            Err(ValidationError::NonPositivePrice { .. })
        ));
        assert!(matches!(
            CalculationInput::new(-10.0, 1),
            Err(ValidationError::NonPositivePrice { .. })
        ));
        assert!(matches!(
            CalculationInput::new(100.0, 0),
            Err(ValidationError::ZeroQuantity)
        ));
    }

    #[test]
    fn input_exposes_validated_fields() {
        let input = CalculationInput::new(612.5, 3).expect("input should validate");
        assert_eq!(input.price(), 612.5);
        assert_eq!(input.quantity(), 3);
    }
}
