use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AudioClip, ProviderId};

/// Uniform contract over one vendor's transcription protocol, whether a
/// single synchronous call or an internally managed submit/poll/fetch
/// sequence. Job handles never leave the adapter.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn id(&self) -> ProviderId;

    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("missing configuration: {0}")]
    Configuration(String),
    #[error("submission rejected: {0}")]
    Submission(String),
    #[error("job rejected by provider: {0}")]
    Rejected(String),
    #[error("provider returned an empty transcript")]
    EmptyResult,
    #[error("no terminal job state after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("transport failure: {0}")]
    Transport(String),
}
