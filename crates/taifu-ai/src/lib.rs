//! Risk narrative client for taifu.
//!
//! This crate contains:
//! - The Gemini `generateContent` wire client with a pinned JSON response
//!   schema
//! - The deterministic zh-TW fallback template
//! - [`RiskAnalyst`], which makes one upstream attempt per invocation and
//!   always returns a well-formed narrative

pub mod analysis;
pub mod analyst;
pub mod error;
pub mod fallback;
pub mod transport;

mod gemini;
mod prompt;

pub use analysis::{AnalysisRequest, RiskAnalysis};
pub use analyst::{NarrativeOutcome, RiskAnalyst, RiskAnalystConfig};
pub use error::AnalysisError;
pub use fallback::fallback_analysis;
pub use transport::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
