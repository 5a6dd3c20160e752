// Test library with shared fixtures for taifu behavior tests
pub use std::future::Future;
pub use std::pin::Pin;
pub use std::sync::Arc;
pub use std::sync::Mutex;

pub use taifu_ai::{
    fallback_analysis, AnalysisRequest, HttpClient, HttpError, HttpRequest, HttpResponse,
    NoopHttpClient, RiskAnalyst, RiskAnalystConfig,
};
pub use taifu_core::{
    margin, CalculationInput, ContractCatalog, FutureContract, FuturesCode, MarginRatio, SourceId,
    StockCode, ValidationError,
};

/// Contract with round ratios, used across the math tests.
pub fn fixture_contract() -> FutureContract {
    FutureContract::new(
        FuturesCode::parse("ABC").expect("fixture code is valid"),
        "測試期貨",
        StockCode::parse("9999").expect("fixture stock code is valid"),
        2000,
        MarginRatio::new(0.0675, 0.075, 0.09).expect("fixture ratios are valid"),
    )
    .expect("fixture contract is valid")
}

/// Transport that always answers with the given status and body, recording
/// every request it sees.
pub struct RecordingHttpClient {
    pub status: u16,
    pub body: String,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request log is not poisoned").clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let status = self.status;
        let body = self.body.clone();
        self.requests
            .lock()
            .expect("request log is not poisoned")
            .push(request);

        Box::pin(async move { Ok(HttpResponse { status, body }) })
    }
}

/// Transport that fails every request at the connection level.
pub struct UnreachableHttpClient;

impl HttpClient for UnreachableHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move { Err(HttpError::new("connection refused")) })
    }
}

/// A response body that conforms to the pinned narrative schema.
pub fn conforming_narrative_body(leverage_risk: &str) -> String {
    let narrative = serde_json::json!({
        "leverageRisk": leverage_risk,
        "marginCallRisk": "追繳風險說明",
        "recommendation": "資金管理建議"
    })
    .to_string();

    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": narrative}]}
        }]
    })
    .to_string()
}

pub fn analyst_config() -> RiskAnalystConfig {
    RiskAnalystConfig {
        api_key: String::from("test-key"),
        model: String::from("gemini-3-flash-preview"),
        timeout_ms: 1_000,
    }
}
