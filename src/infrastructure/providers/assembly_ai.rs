use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{ProviderAdapter, ProviderError};
use crate::domain::{AudioClip, ProviderId};

use super::poll::{poll_until_terminal, PollPolicy, PollState};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// Submit-and-poll adapter for AssemblyAI: raw-bytes upload, JSON job
/// creation, then status polling until the transcript text is available.
pub struct AssemblyAiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
    poll: PollPolicy,
}

impl AssemblyAiAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        language: String,
        poll: PollPolicy,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ProviderError::Configuration("AssemblyAI API key is required".to_string())
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            language,
            poll,
        })
    }

    async fn upload(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        tracing::debug!(filename = %clip.filename, "Uploading clip to AssemblyAI");

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header("authorization", &self.api_key)
            .body(clip.data.to_vec())
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("upload: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Submission(format!(
                "upload status {}: {}",
                status, body
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("parse upload response: {}", e)))?;
        Ok(uploaded.upload_url)
    }

    async fn create_job(&self, audio_url: &str) -> Result<String, ProviderError> {
        let request = serde_json::json!({
            "audio_url": audio_url,
            "language_code": self.language,
            "speech_model": "best",
        });

        let response = self
            .client
            .post(format!("{}/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("create job: {}", e)))?;

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

        let job: JobCreated = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("parse job response: {}", e)))?;

        tracing::debug!(job_id = %job.id, "AssemblyAI transcript requested");
        Ok(job.id)
    }

    async fn poll_status(&self, job_id: &str) -> Result<PollState<String>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/transcript/{}", self.base_url, job_id))
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("poll: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::Transport(format!("poll status {}", status)));
        }

        let job: JobStatus = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("parse status: {}", e)))?;

        match job.status.as_str() {
            "completed" => Ok(PollState::Completed(job.text.unwrap_or_default())),
            "error" => {
                tracing::debug!(job_id = %job_id, detail = ?job.error, "AssemblyAI job failed");
                Ok(PollState::Rejected(format!(
                    "AssemblyAI rejected job {}",
                    job_id
                )))
            }
            _ => Ok(PollState::Pending),
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct JobCreated {
    id: String,
}

#[derive(Deserialize)]
struct JobStatus {
    status: String,
    text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl ProviderAdapter for AssemblyAiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::AssemblyAi
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        let audio_url = self.upload(clip).await?;
        let job_id = self.create_job(&audio_url).await?;
        let text = poll_until_terminal(self.poll, || self.poll_status(&job_id)).await?;

        let transcript = text.trim().to_string();
        if transcript.is_empty() {
            return Err(ProviderError::EmptyResult);
        }
        Ok(transcript)
    }
}
