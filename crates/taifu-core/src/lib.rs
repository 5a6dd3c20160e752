//! Core contracts for taifu.
//!
//! This crate contains:
//! - Canonical domain models and validation for TAIFEX single-stock futures
//! - The compiled-in contract catalog with code lookup and substring search
//! - The pure margin-tier calculator
//! - Response report metadata and structured errors

pub mod catalog;
pub mod domain;
pub mod error;
pub mod margin;
pub mod report;

pub use catalog::ContractCatalog;
pub use domain::{
    CalculationInput, CalculationResult, FutureContract, FuturesCode, MarginRatio, StockCode,
    UtcDateTime,
};
pub use error::{CoreError, ValidationError};
pub use report::{Report, ReportMeta, SourceId};
