//! Canonical domain types for TAIFEX single-stock futures.
//!
//! All models validate their invariants at construction and carry full serde
//! support. Invalid states (blank names, out-of-range ratios, non-positive
//! prices) are unrepresentable once a value exists.

mod codes;
mod models;
mod timestamp;

pub use codes::{FuturesCode, StockCode};
pub use models::{CalculationInput, CalculationResult, FutureContract, MarginRatio};
pub use timestamp::UtcDateTime;
