use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_FUTURES_CODE_LEN: usize = 8;
const STOCK_CODE_LEN: std::ops::RangeInclusive<usize> = 4..=6;

/// Normalized TAIFEX futures product code, e.g. `CDF` or `QFF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FuturesCode(String);

impl FuturesCode {
    /// Parse and normalize a futures code to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyFuturesCode);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_FUTURES_CODE_LEN {
            return Err(ValidationError::FuturesCodeTooLong {
                len,
                max: MAX_FUTURES_CODE_LEN,
            });
        }

        if let Some(first) = normalized.chars().next() {
            if !first.is_ascii_alphabetic() {
                return Err(ValidationError::FuturesCodeInvalidStart { ch: first });
            }
        }

        for (index, ch) in normalized.chars().enumerate() {
            if !ch.is_ascii_alphanumeric() {
                return Err(ValidationError::FuturesCodeInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FuturesCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for FuturesCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for FuturesCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<FuturesCode> for String {
    fn from(value: FuturesCode) -> Self {
        value.0
    }
}

/// Listed code of the underlying TWSE/TPEx stock, e.g. `2330`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockCode(String);

impl StockCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        let digits_only = trimmed.chars().all(|ch| ch.is_ascii_digit());

        if !STOCK_CODE_LEN.contains(&len) || !digits_only {
            return Err(ValidationError::InvalidStockCode {
                value: input.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StockCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StockCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for StockCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StockCode> for String {
    fn from(value: StockCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_futures_code() {
        let parsed = FuturesCode::parse(" cdf ").expect("code should parse");
        assert_eq!(parsed.as_str(), "CDF");
    }

    #[test]
    fn rejects_numeric_start() {
        let err = FuturesCode::parse("2DF").expect_err("must fail");
        assert!(matches!(err, ValidationError::FuturesCodeInvalidStart { .. }));
    }

    #[test]
    fn rejects_punctuation() {
        let err = FuturesCode::parse("CD.F").expect_err("must fail");
        assert!(matches!(err, ValidationError::FuturesCodeInvalidChar { .. }));
    }

    #[test]
    fn rejects_overlong_code() {
        let err = FuturesCode::parse("ABCDEFGHI").expect_err("must fail");
        assert!(matches!(err, ValidationError::FuturesCodeTooLong { .. }));
    }

    #[test]
    fn parses_stock_code() {
        let parsed = StockCode::parse("2330").expect("code should parse");
        assert_eq!(parsed.as_str(), "2330");
    }

    #[test]
    fn rejects_short_and_alpha_stock_codes() {
        assert!(StockCode::parse("23").is_err());
        assert!(StockCode::parse("23A0").is_err());
        assert!(StockCode::parse("").is_err());
    }
}
