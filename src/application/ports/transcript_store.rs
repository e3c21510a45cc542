/// Persistence for completed transcripts, keyed by clip stem and provider.
#[async_trait::async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn save(
        &self,
        clip_stem: &str,
        provider: &str,
        transcript: &str,
    ) -> Result<(), TranscriptStoreError>;

    async fn load_all(&self, clip_stem: &str) -> Result<Vec<StoredTranscript>, TranscriptStoreError>;

    /// Removes every stored transcript for the clip, returning the provider
    /// names that were deleted.
    async fn delete_all(&self, clip_stem: &str) -> Result<Vec<String>, TranscriptStoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTranscript {
    pub provider: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("save failed: {0}")]
    SaveFailed(String),
    #[error("load failed: {0}")]
    LoadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
