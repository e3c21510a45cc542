use bytes::Bytes;

/// Persistence for uploaded audio clips, keyed by filename.
#[async_trait::async_trait]
pub trait ClipStore: Send + Sync {
    async fn store(&self, filename: &str, data: Bytes) -> Result<(), ClipStoreError>;

    async fn fetch(&self, filename: &str) -> Result<Bytes, ClipStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipStoreError {
    #[error("clip not found: {0}")]
    NotFound(String),
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
}
