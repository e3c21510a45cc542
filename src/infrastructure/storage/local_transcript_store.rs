use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{StoredTranscript, TranscriptStore, TranscriptStoreError};

/// Filesystem-backed transcript storage, one `{clip_stem}/{provider}.txt`
/// object per successful transcription.
pub struct LocalTranscriptStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalTranscriptStore {
    pub fn new(base_path: PathBuf) -> Result<Self, TranscriptStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| TranscriptStoreError::SaveFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| TranscriptStoreError::SaveFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl TranscriptStore for LocalTranscriptStore {
    async fn save(
        &self,
        clip_stem: &str,
        provider: &str,
        transcript: &str,
    ) -> Result<(), TranscriptStoreError> {
        let path = StorePath::from(format!("{}/{}.txt", clip_stem, provider));
        self.inner
            .put(&path, PutPayload::from(transcript.as_bytes().to_vec()))
            .await
            .map_err(|e| TranscriptStoreError::SaveFailed(e.to_string()))?;
        Ok(())
    }

    async fn load_all(
        &self,
        clip_stem: &str,
    ) -> Result<Vec<StoredTranscript>, TranscriptStoreError> {
        let prefix = StorePath::from(clip_stem);
        let mut listing = self.inner.list(Some(&prefix));

        let mut locations = Vec::new();
        while let Some(entry) = listing.next().await {
            let meta = entry.map_err(|e| TranscriptStoreError::LoadFailed(e.to_string()))?;
            locations.push(meta.location);
        }
        locations.sort_unstable();

        let mut transcripts = Vec::with_capacity(locations.len());
        for location in locations {
            let provider = location
                .filename()
                .map(|name| name.trim_end_matches(".txt").to_string())
                .unwrap_or_default();

            let result = self
                .inner
                .get(&location)
                .await
                .map_err(|e| TranscriptStoreError::LoadFailed(e.to_string()))?;
            let bytes = result
                .bytes()
                .await
                .map_err(|e| TranscriptStoreError::LoadFailed(e.to_string()))?;
            let text = String::from_utf8(bytes.to_vec())
                .map_err(|e| TranscriptStoreError::LoadFailed(e.to_string()))?;

            transcripts.push(StoredTranscript { provider, text });
        }

        Ok(transcripts)
    }

    async fn delete_all(&self, clip_stem: &str) -> Result<Vec<String>, TranscriptStoreError> {
        let prefix = StorePath::from(clip_stem);
        let mut listing = self.inner.list(Some(&prefix));

        let mut locations = Vec::new();
        while let Some(entry) = listing.next().await {
            let meta = entry.map_err(|e| TranscriptStoreError::DeleteFailed(e.to_string()))?;
            locations.push(meta.location);
        }
        locations.sort_unstable();

        let mut providers = Vec::with_capacity(locations.len());
        for location in locations {
            self.inner
                .delete(&location)
                .await
                .map_err(|e| TranscriptStoreError::DeleteFailed(e.to_string()))?;
            providers.push(
                location
                    .filename()
                    .map(|name| name.trim_end_matches(".txt").to_string())
                    .unwrap_or_default(),
            );
        }

        Ok(providers)
    }
}
