use thiserror::Error;

use crate::transport::HttpError;

/// Failure modes of one narrative generation attempt.
///
/// These never cross `RiskAnalyst::analyze`: every variant is logged and
/// converged to the deterministic local template before the caller sees a
/// result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request encoding failed: {0}")]
    EncodeRequest(String),

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("generation endpoint returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("no narrative candidate in generation response")]
    MissingCandidate,

    #[error("generation response is not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("narrative payload does not match the pinned schema: {0}")]
    MalformedNarrative(String),

    #[error("narrative field '{field}' is blank")]
    BlankField { field: &'static str },
}
