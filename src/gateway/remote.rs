use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;

use crate::config::GatewayConfig;
use crate::error::{AugurError, Result};
use crate::gateway::{parse_reply, AnalysisGateway, GatewayReply, GatewayRequest};

/// Remote generative-model client speaking the `generateContent` JSON API.
///
/// The model is asked for raw JSON; whatever text comes back goes through
/// the lenient reply parser, so a rambling model degrades to an empty
/// reply rather than an error. Only transport and HTTP-status failures
/// surface as `Err`, and the scan entry points absorb those too.
pub struct RemoteGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl RemoteGateway {
    /// Build a client from configuration. Fails when the API key
    /// environment variable is unset or the HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            AugurError::Config(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .user_agent(format!("augur/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(request: &GatewayRequest<'_>) -> serde_json::Value {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(image) = request.image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": BASE64.encode(&image.data),
                }
            }));
        }
        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "response_mime_type": "application/json" },
        })
    }
}

#[async_trait]
impl AnalysisGateway for RemoteGateway {
    async fn analyze(&self, request: GatewayRequest<'_>) -> Result<GatewayReply> {
        let response = self
            .client
            .post(self.request_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(&request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AugurError::Gateway(format!(
                "model endpoint returned HTTP {}",
                response.status()
            )));
        }

        let envelope: serde_json::Value = response.json().await?;
        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();

        Ok(parse_reply(text))
    }
}
