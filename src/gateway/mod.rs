mod remote;

pub use remote::RemoteGateway;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{ScanMode, TemplateAnomaly};
use crate::error::{AugurError, Result};

/// Raw image bytes handed to the deep-vision pass.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One unit of work for the external model.
#[derive(Debug, Clone)]
pub struct GatewayRequest<'a> {
    pub prompt: String,
    pub image: Option<&'a ImagePayload>,
    pub mode: ScanMode,
}

impl<'a> GatewayRequest<'a> {
    #[must_use]
    pub fn text_only(prompt: String, mode: ScanMode) -> Self {
        Self {
            prompt,
            image: None,
            mode,
        }
    }
}

/// Structured reply consumed by the core. Every field defaults to its
/// empty value; extra fields from the model are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayReply {
    pub score: i64,
    pub reasons: Vec<String>,
    pub explanation: String,
    pub layout_status: Option<String>,
    pub anomalies: Vec<TemplateAnomaly>,
}

/// The external analysis boundary: hand content to a remote generative
/// model, get a structured reply back, or fail. Callers of the scan entry
/// points never see these failures; they are absorbed into the fallback
/// paths.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze(&self, request: GatewayRequest<'_>) -> Result<GatewayReply>;
}

/// A gateway that is never available. Forces the heuristic-only and
/// degraded paths; used when no API key is configured and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGateway;

#[async_trait]
impl AnalysisGateway for OfflineGateway {
    async fn analyze(&self, _request: GatewayRequest<'_>) -> Result<GatewayReply> {
        Err(AugurError::Gateway(
            "no remote model configured".to_string(),
        ))
    }
}

/// Parse a model reply leniently. Total: malformed input yields the empty
/// reply, never an error. Markdown code fences around the JSON are
/// tolerated since models emit them even when told not to.
#[must_use]
pub fn parse_reply(raw: &str) -> GatewayReply {
    serde_json::from_str(strip_code_fences(raw)).unwrap_or_default()
}

fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}
