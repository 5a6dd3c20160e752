//! Immutable contract catalog and search.
//!
//! The catalog is built once at startup and shared read-only. Insertion
//! order is the presentation order: `search` and `contracts` both yield
//! entries exactly as the catalog lists them.

use std::collections::HashSet;

use crate::domain::{FutureContract, FuturesCode};
use crate::ValidationError;

mod taifex;

/// Order-preserving table of tradable single-stock futures contracts.
#[derive(Debug, Clone)]
pub struct ContractCatalog {
    contracts: Vec<FutureContract>,
}

impl ContractCatalog {
    /// Build a catalog from explicit entries, rejecting duplicate futures
    /// codes.
    pub fn new(contracts: Vec<FutureContract>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(contracts.len());
        for contract in &contracts {
            if !seen.insert(contract.code.clone()) {
                return Err(ValidationError::DuplicateFuturesCode {
                    code: contract.code.as_str().to_owned(),
                });
            }
        }

        Ok(Self { contracts })
    }

    /// The compiled-in TAIFEX single-stock futures reference table.
    pub fn taifex() -> Self {
        Self::new(taifex::contracts()).expect("built-in catalog entries are valid")
    }

    /// Exact lookup by futures code, normalized the same way `FuturesCode`
    /// parses user input.
    ///
    /// Unknown and unparseable codes are an absent result, not an error.
    pub fn find_by_code(&self, code: &str) -> Option<&FutureContract> {
        let code = FuturesCode::parse(code).ok()?;
        self.contracts.iter().find(|contract| contract.code == code)
    }

    /// Case-insensitive substring search over product name, stock code and
    /// futures code.
    ///
    /// Matches keep catalog order. The empty term matches every entry; a
    /// term matching nothing yields an empty vec. No error path exists.
    pub fn search(&self, term: &str) -> Vec<&FutureContract> {
        let term = term.to_lowercase();

        self.contracts
            .iter()
            .filter(|contract| {
                contract.name.to_lowercase().contains(&term)
                    || contract.stock_code.as_str().contains(&term)
                    || contract.code.as_str().to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn contracts(&self) -> &[FutureContract] {
        &self.contracts
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
