use serde::Serialize;

use taifu_core::{ContractCatalog, FutureContract, SourceId};

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    total_matches: usize,
    results: Vec<FutureContract>,
}

pub fn run(args: &SearchArgs, catalog: &ContractCatalog) -> Result<CommandResult, CliError> {
    if args.limit == 0 {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let matches = catalog.search(&args.query);
    let total_matches = matches.len();
    let results = matches
        .into_iter()
        .take(args.limit)
        .cloned()
        .collect::<Vec<_>>();

    let data = serde_json::to_value(SearchResponseData {
        query: args.query.clone(),
        total_matches,
        results,
    })?;

    let result = CommandResult::ok(data, vec![SourceId::Catalog]);
    if total_matches > args.limit {
        return Ok(result.with_warning(format!(
            "{total_matches} matches truncated to --limit {}",
            args.limit
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(query: &str, limit: usize) -> SearchArgs {
        SearchArgs {
            query: String::from(query),
            limit,
        }
    }

    #[test]
    fn finds_contract_by_stock_code() {
        let catalog = ContractCatalog::taifex();
        let result = run(&args("2317", 20), &catalog).expect("command should succeed");

        let results = result.data["results"].as_array().expect("results array");
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|contract| contract["stock_code"] == "2317"));
    }

    #[test]
    fn empty_query_lists_catalog_up_to_limit() {
        let catalog = ContractCatalog::taifex();
        let result = run(&args("", 5), &catalog).expect("command should succeed");

        assert_eq!(result.data["results"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            result.data["total_matches"].as_u64(),
            Some(catalog.len() as u64)
        );
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn unmatched_query_is_empty_success() {
        let catalog = ContractCatalog::taifex();
        let result = run(&args("zzzz", 20), &catalog).expect("command should succeed");

        assert_eq!(result.data["results"].as_array().map(Vec::len), Some(0));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn zero_limit_is_a_command_error() {
        let catalog = ContractCatalog::taifex();
        let err = run(&args("CDF", 0), &catalog).expect_err("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }
}
