use thiserror::Error;

/// Validation and contract errors exposed by `taifu-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("futures code cannot be empty")]
    EmptyFuturesCode,
    #[error("futures code length {len} exceeds max {max}")]
    FuturesCodeTooLong { len: usize, max: usize },
    #[error("futures code must start with an ASCII letter: '{ch}'")]
    FuturesCodeInvalidStart { ch: char },
    #[error("futures code contains invalid character '{ch}' at index {index}")]
    FuturesCodeInvalidChar { ch: char, index: usize },

    #[error("stock code must be 4-6 ASCII digits: '{value}'")]
    InvalidStockCode { value: String },

    #[error("contract name cannot be empty")]
    EmptyContractName,
    #[error("shares per contract must be positive")]
    ZeroSharesPerContract,

    #[error("margin ratio '{field}' must be finite")]
    NonFiniteRatio { field: &'static str },
    #[error("margin ratio '{field}' must be within (0, 1]: {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },

    #[error("price must be finite")]
    NonFinitePrice,
    #[error("price must be positive: {value}")]
    NonPositivePrice { value: f64 },
    #[error("quantity must be at least one contract")]
    ZeroQuantity,

    #[error("duplicate futures code in catalog: '{code}'")]
    DuplicateFuturesCode { code: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("source_chain must contain at least one source")]
    EmptySourceChain,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
