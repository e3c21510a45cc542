use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use crate::application::ports::{ProviderAdapter, ProviderError};
use crate::domain::{AudioClip, ProviderId};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const API_VERSION: &str = "2023-06-01";

/// Synchronous adapter sending base64-encoded audio to a messages-style
/// model endpoint with a fixed transcription prompt.
pub struct GrokAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    language: String,
}

impl GrokAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        language: String,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ProviderError::Configuration("Anthropic API key is required".to_string())
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language,
        })
    }

    fn prompt(&self) -> String {
        format!(
            "Transcribe this audio clip (language code: {}). Return only the raw \
             transcription text without any formatting or commentary.",
            self.language
        )
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ProviderAdapter for GrokAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Grok
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&clip.data);

        let request = serde_json::json!({
            "model": self.model,
            "max_tokens": 4000,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": self.prompt() },
                    {
                        "type": "audio",
                        "source": {
                            "type": "base64",
                            "media_type": clip.mime_type(),
                            "data": encoded,
                        },
                    },
                ],
            }],
        });

        tracing::debug!(model = %self.model, filename = %clip.filename, "Sending clip to Grok");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Submission(format!(
                "status {}: {}",
                status, body
            )));
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("parse response: {}", e)))?;

        let transcript = message
            .content
            .first()
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();

        if transcript.is_empty() {
            return Err(ProviderError::EmptyResult);
        }
        Ok(transcript)
    }
}
