//! CLI argument definitions for taifu.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `contracts` | List the compiled-in TAIFEX stock-futures catalog |
//! | `search` | Search contracts by name, stock code or futures code |
//! | `margin` | Compute margin tiers for a contract |
//! | `analyze` | Compute margin tiers and attach an AI risk narrative |
//!
//! # Examples
//!
//! ```bash
//! # Margin tiers for one TSMC futures contract at 1000 TWD
//! taifu margin CDF --price 1000
//!
//! # Search by underlying stock code
//! taifu search 2330
//!
//! # Margin tiers plus risk narrative, pretty-printed
//! taifu analyze CDF --price 1000 --contracts 2 --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// TAIFEX single-stock futures margin calculator with AI risk narrative.
#[derive(Debug, Parser)]
#[command(
    name = "taifu",
    author,
    version,
    about = "TAIFEX stock-futures margin tiers with AI risk narrative"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Timeout for the narrative request, in milliseconds.
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the compiled-in TAIFEX stock-futures catalog.
    Contracts,
    /// Search contracts by product name, stock code or futures code.
    Search(SearchArgs),
    /// Compute margin tiers for a contract at a given price.
    Margin(MarginArgs),
    /// Compute margin tiers and attach an AI risk narrative.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term matched against name, stock code and futures code.
    /// An empty term lists the whole catalog.
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct MarginArgs {
    /// Futures code of the contract, e.g. CDF.
    pub code: String,

    /// Current underlying share price in TWD.
    #[arg(long)]
    pub price: f64,

    /// Number of contracts.
    #[arg(long, default_value_t = 1)]
    pub contracts: u32,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Futures code of the contract, e.g. CDF.
    pub code: String,

    /// Current underlying share price in TWD.
    #[arg(long)]
    pub price: f64,

    /// Number of contracts.
    #[arg(long, default_value_t = 1)]
    pub contracts: u32,
}
