use std::sync::Arc;

use taifu_core::SourceId;

use crate::analysis::{AnalysisRequest, RiskAnalysis};
use crate::fallback::fallback_analysis;
use crate::gemini::{GeminiClient, DEFAULT_MODEL};
use crate::transport::{HttpClient, ReqwestHttpClient};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Narrative produced by one `analyze` call, plus which source produced it.
///
/// The narrative body has the same shape either way; `source` exists for
/// report metadata, never to change what gets presented.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeOutcome {
    pub analysis: RiskAnalysis,
    pub source: SourceId,
}

/// Risk narrative client with an always-succeeds contract.
///
/// Each invocation makes exactly one upstream generation attempt; any
/// failure (transport, status, malformed payload, schema violation) is
/// logged and converged to the local template. Invocations are independent.
/// A caller maintaining per-session display state should not overlap two
/// calls for the same session, since whichever completes last wins.
pub struct RiskAnalyst {
    client: GeminiClient,
}

impl RiskAnalyst {
    /// Analyst backed by the production reqwest transport.
    pub fn new(config: RiskAnalystConfig) -> Self {
        Self::with_transport(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Analyst with an injected transport, for tests and embedding.
    pub fn with_transport(transport: Arc<dyn HttpClient>, config: RiskAnalystConfig) -> Self {
        Self {
            client: GeminiClient::new(transport, config.api_key, config.model, config.timeout_ms),
        }
    }

    /// Produce a narrative for one margin estimate. Never fails.
    pub async fn analyze(&self, request: &AnalysisRequest) -> NarrativeOutcome {
        match self.client.generate(request).await {
            Ok(analysis) => NarrativeOutcome {
                analysis,
                source: SourceId::Gemini,
            },
            Err(error) => {
                tracing::warn!(%error, "narrative generation failed, using local template");
                NarrativeOutcome {
                    analysis: fallback_analysis(request),
                    source: SourceId::LocalTemplate,
                }
            }
        }
    }
}

/// Environment-driven analyst configuration.
#[derive(Debug, Clone)]
pub struct RiskAnalystConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl RiskAnalystConfig {
    /// Read `TAIFU_GEMINI_API_KEY` and `TAIFU_GEMINI_MODEL` from the
    /// environment.
    ///
    /// A missing key still produces a usable config: the upstream attempt is
    /// made, rejected and converged to the local template.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("TAIFU_GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("TAIFU_GEMINI_MODEL")
                .unwrap_or_else(|_| String::from(DEFAULT_MODEL)),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpError, HttpRequest, HttpResponse};
    use std::future::Future;
    use std::pin::Pin;

    struct FailingHttpClient;

    impl HttpClient for FailingHttpClient {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async move { Err(HttpError::new("connection refused")) })
        }
    }

    struct ConformingHttpClient;

    impl HttpClient for ConformingHttpClient {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async move {
                let narrative = serde_json::json!({
                    "leverageRisk": "槓桿說明",
                    "marginCallRisk": "追繳說明",
                    "recommendation": "建議內容"
                })
                .to_string();
                let body = serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": narrative}]}}]
                })
                .to_string();

                Ok(HttpResponse::ok_json(body))
            })
        }
    }

    fn config() -> RiskAnalystConfig {
        RiskAnalystConfig {
            api_key: String::from("test-key"),
            model: String::from(DEFAULT_MODEL),
            timeout_ms: 1_000,
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            contract_name: String::from("鴻海期貨"),
            stock_code: String::from("2317"),
            leverage: 7.4,
            margin_requirement: 54_000.0,
            price: 200.0,
        }
    }

    #[tokio::test]
    async fn transport_failure_converges_to_local_template() {
        let analyst = RiskAnalyst::with_transport(Arc::new(FailingHttpClient), config());

        let outcome = analyst.analyze(&request()).await;

        assert_eq!(outcome.source, SourceId::LocalTemplate);
        assert!(outcome.analysis.leverage_risk.contains("7.4"));
        assert!(!outcome.analysis.recommendation.trim().is_empty());
    }

    #[tokio::test]
    async fn conforming_upstream_passes_through() {
        let analyst = RiskAnalyst::with_transport(Arc::new(ConformingHttpClient), config());

        let outcome = analyst.analyze(&request()).await;

        assert_eq!(outcome.source, SourceId::Gemini);
        assert_eq!(outcome.analysis.leverage_risk, "槓桿說明");
        assert_eq!(outcome.analysis.recommendation, "建議內容");
    }

    #[test]
    fn timeout_override_applies() {
        let config = config().with_timeout_ms(5_000);
        assert_eq!(config.timeout_ms, 5_000);
    }
}
