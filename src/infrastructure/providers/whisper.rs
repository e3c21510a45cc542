use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{ProviderAdapter, ProviderError};
use crate::domain::{AudioClip, ProviderId};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Synchronous adapter for the hosted Whisper endpoint: one multipart call,
/// transcript text straight from the response body.
pub struct OpenAiWhisperAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    language: String,
}

impl OpenAiWhisperAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        language: String,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ProviderError::Configuration("OpenAI API key is required".to_string())
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
}

#[async_trait]
impl ProviderAdapter for OpenAiWhisperAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Whisper
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        let file_part = multipart::Part::bytes(clip.data.to_vec())
            .file_name(clip.filename.clone())
            .mime_str(clip.mime_type())
            .map_err(|e| ProviderError::Submission(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, filename = %clip.filename, "Sending clip to Whisper");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
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

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("body: {}", e)))?;

        let transcript = text.trim().to_string();
        if transcript.is_empty() {
            return Err(ProviderError::EmptyResult);
        }
        Ok(transcript)
    }
}
