use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Which component produced (or was consulted for) a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    /// The compiled-in contract catalog.
    Catalog,
    /// The Gemini generation endpoint.
    Gemini,
    /// The deterministic local narrative template.
    LocalTemplate,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Gemini => "gemini",
            Self::LocalTemplate => "local_template",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard response report for all `taifu` machine-readable outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report<T> {
    pub meta: ReportMeta,
    pub data: T,
}

impl<T> Report<T> {
    pub fn new(meta: ReportMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: UtcDateTime,
    /// Sources consulted while producing the payload, in consultation order.
    /// A narrative that fell back reads `[catalog, gemini, local_template]`.
    pub source_chain: Vec<SourceId>,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ReportMeta {
    pub fn new(
        request_id: impl Into<String>,
        schema_version: impl Into<String>,
        source_chain: Vec<SourceId>,
        latency_ms: u64,
    ) -> Result<Self, ValidationError> {
        let meta = Self {
            request_id: request_id.into(),
            schema_version: schema_version.into(),
            generated_at: UtcDateTime::now(),
            source_chain,
            latency_ms,
            warnings: Vec::new(),
        };
        meta.validate_schema_compliance()?;
        Ok(meta)
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn validate_schema_compliance(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        if !is_valid_schema_version(&self.schema_version) {
            return Err(ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            });
        }

        if self.source_chain.is_empty() {
            return Err(ValidationError::EmptySourceChain);
        }

        Ok(())
    }
}

fn is_valid_schema_version(value: &str) -> bool {
    let Some(version) = value.strip_prefix('v') else {
        return false;
    };

    let mut parts = version.split('.');
    let major = parts.next();
    let minor = parts.next();
    let patch = parts.next();

    if parts.next().is_some() {
        return false;
    }

    [major, minor, patch].iter().all(|part| {
        part.is_some_and(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_meta() {
        let meta = ReportMeta::new("request-12345", "v1.0.0", vec![SourceId::Catalog], 11)
            .expect("meta should be valid");

        assert_eq!(meta.schema_version, "v1.0.0");
        assert_eq!(meta.source_chain, vec![SourceId::Catalog]);
    }

    #[test]
    fn rejects_bad_schema_version() {
        let err = ReportMeta::new("request-12345", "1.0.0", vec![SourceId::Catalog], 1)
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSchemaVersion { .. }));
    }

    #[test]
    fn rejects_short_request_id() {
        let err =
            ReportMeta::new("short", "v1.0.0", vec![SourceId::Catalog], 1).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRequestId));
    }

    #[test]
    fn rejects_empty_source_chain() {
        let err = ReportMeta::new("request-12345", "v1.0.0", vec![], 1).expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySourceChain));
    }

    #[test]
    fn source_ids_serialize_snake_case() {
        let chain = vec![SourceId::Catalog, SourceId::Gemini, SourceId::LocalTemplate];
        let json = serde_json::to_string(&chain).expect("chain should serialize");
        assert_eq!(json, r#"["catalog","gemini","local_template"]"#);
    }

    #[test]
    fn report_serializes_meta_and_data() {
        let meta = ReportMeta::new("request-12345", "v1.0.0", vec![SourceId::Catalog], 2)
            .expect("meta should be valid");
        let report = Report::new(meta, serde_json::json!({"count": 1}));

        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["data"]["count"], 1);
        assert_eq!(value["meta"]["schema_version"], "v1.0.0");
        assert!(value["meta"].get("warnings").is_none());
    }
}
