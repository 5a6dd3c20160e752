//! Wire client for the Gemini `generateContent` endpoint.
//!
//! Requests pin `responseMimeType: application/json` and a three-field
//! response schema, so a conforming upstream answer is itself a JSON
//! document parseable straight into [`RiskAnalysis`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisRequest, RiskAnalysis};
use crate::error::AnalysisError;
use crate::prompt;
use crate::transport::{HttpClient, HttpRequest};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub(crate) const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub(crate) struct GeminiClient {
    transport: Arc<dyn HttpClient>,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub(crate) fn new(
        transport: Arc<dyn HttpClient>,
        api_key: String,
        model: String,
        timeout_ms: u64,
    ) -> Self {
        Self {
            transport,
            api_key,
            model,
            timeout_ms,
        }
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/models/{}:generateContent", self.model)
    }

    /// One generation attempt. No retry lives here or anywhere above.
    pub(crate) async fn generate(
        &self,
        request: &AnalysisRequest,
    ) -> Result<RiskAnalysis, AnalysisError> {
        let payload = serde_json::to_string(&GenerateContentRequest::for_analysis(request))
            .map_err(|error| AnalysisError::EncodeRequest(error.to_string()))?;

        let http_request = HttpRequest::post(self.endpoint())
            .with_header("content-type", "application/json")
            .with_header("x-goog-api-key", self.api_key.clone())
            .with_body(payload)
            .with_timeout_ms(self.timeout_ms);

        let response = self.transport.execute(http_request).await?;

        if !response.is_success() {
            return Err(AnalysisError::UpstreamStatus {
                status: response.status,
            });
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&response.body)
            .map_err(|error| AnalysisError::MalformedResponse(error.to_string()))?;

        let text = decoded
            .narrative_text()
            .ok_or(AnalysisError::MissingCandidate)?;

        let narrative: RiskAnalysis = serde_json::from_str(&text)
            .map_err(|error| AnalysisError::MalformedNarrative(error.to_string()))?;

        validate_narrative(&narrative)?;
        Ok(narrative)
    }
}

fn validate_narrative(narrative: &RiskAnalysis) -> Result<(), AnalysisError> {
    if narrative.leverage_risk.trim().is_empty() {
        return Err(AnalysisError::BlankField {
            field: "leverageRisk",
        });
    }
    if narrative.margin_call_risk.trim().is_empty() {
        return Err(AnalysisError::BlankField {
            field: "marginCallRisk",
        });
    }
    if narrative.recommendation.trim().is_empty() {
        return Err(AnalysisError::BlankField {
            field: "recommendation",
        });
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemContent,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn for_analysis(request: &AnalysisRequest) -> Self {
        Self {
            system_instruction: SystemContent {
                parts: vec![TextPart {
                    text: String::from(prompt::SYSTEM_INSTRUCTION),
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart {
                    text: prompt::user_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: ResponseSchema::narrative(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SystemContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: ResponseSchema,
}

#[derive(Debug, Serialize)]
struct ResponseSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    properties: SchemaProperties,
    required: [&'static str; 3],
}

impl ResponseSchema {
    fn narrative() -> Self {
        Self {
            schema_type: "OBJECT",
            properties: SchemaProperties {
                leverage_risk: SchemaProperty {
                    schema_type: "STRING",
                    description: "Risk associated with current leverage levels.",
                },
                margin_call_risk: SchemaProperty {
                    schema_type: "STRING",
                    description: "Likelihood and distance to a margin call.",
                },
                recommendation: SchemaProperty {
                    schema_type: "STRING",
                    description: "Professional trading recommendation.",
                },
            },
            required: ["leverageRisk", "marginCallRisk", "recommendation"],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaProperties {
    leverage_risk: SchemaProperty,
    margin_call_risk: SchemaProperty,
    recommendation: SchemaProperty,
}

#[derive(Debug, Serialize)]
struct SchemaProperty {
    #[serde(rename = "type")]
    schema_type: &'static str,
    description: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when absent or
    /// blank.
    fn narrative_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
