use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{ProviderAdapter, ProviderError};
use crate::domain::{AudioClip, ProviderId};

use super::poll::{poll_until_terminal, PollPolicy, PollState};

const DEFAULT_BASE_URL: &str = "https://asr.api.speechmatics.com/v2";

/// Submit-and-poll adapter for the Speechmatics batch API: multipart job
/// submission, status polling, plain-text transcript fetch.
pub struct SpeechmaticsAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
    poll: PollPolicy,
}

impl SpeechmaticsAdapter {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        language: String,
        poll: PollPolicy,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ProviderError::Configuration("Speechmatics API key is required".to_string())
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

    async fn submit(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        let job_config = serde_json::json!({
            "type": "transcription",
            "transcription_config": {
                "language": self.language,
                "operating_point": "enhanced",
            },
        });

        let config_part = multipart::Part::text(job_config.to_string())
            .mime_str("application/json")
            .map_err(|e| ProviderError::Submission(format!("config part: {}", e)))?;
        let file_part = multipart::Part::bytes(clip.data.to_vec())
            .file_name(clip.filename.clone())
            .mime_str(clip.mime_type())
            .map_err(|e| ProviderError::Submission(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .part("config", config_part)
            .part("data_file", file_part);

        tracing::debug!(filename = %clip.filename, "Submitting job to Speechmatics");

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("submit: {}", e)))?;

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
            .map_err(|e| ProviderError::Transport(format!("parse submit response: {}", e)))?;

        tracing::debug!(job_id = %job.id, "Speechmatics job created");
        Ok(job.id)
    }

    async fn poll_status(&self, job_id: &str) -> Result<PollState<()>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}", self.base_url, job_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("poll: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::Transport(format!("poll status {}", status)));
        }

        let body: JobStatusEnvelope = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("parse status: {}", e)))?;

        match body.job.status.as_str() {
            "done" => Ok(PollState::Completed(())),
            "rejected" => {
                tracing::debug!(job_id = %job_id, detail = ?body.job, "Speechmatics rejected job");
                Ok(PollState::Rejected(format!(
                    "Speechmatics rejected job {}",
                    job_id
                )))
            }
            _ => Ok(PollState::Pending),
        }
    }

    async fn fetch_transcript(&self, job_id: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(format!(
                "{}/jobs/{}/transcript?format=txt",
                self.base_url, job_id
            ))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("fetch: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::Transport(format!("fetch status {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("fetch body: {}", e)))?;

        let transcript = text.trim().to_string();
        if transcript.is_empty() {
            return Err(ProviderError::EmptyResult);
        }
        Ok(transcript)
    }
}

#[derive(Deserialize)]
struct JobCreated {
    id: String,
}

#[derive(Deserialize)]
struct JobStatusEnvelope {
    job: JobDetail,
}

#[derive(Debug, Deserialize)]
struct JobDetail {
    status: String,
}

#[async_trait]
impl ProviderAdapter for SpeechmaticsAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Speechmatics
    }

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        let job_id = self.submit(clip).await?;
        poll_until_terminal(self.poll, || self.poll_status(&job_id)).await?;
        self.fetch_transcript(&job_id).await
    }
}
