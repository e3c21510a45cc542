use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ClipStore, ClipStoreError};

/// Filesystem-backed clip storage under a single base directory.
pub struct LocalClipStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalClipStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ClipStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| ClipStoreError::StoreFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ClipStoreError::StoreFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl ClipStore for LocalClipStore {
    async fn store(&self, filename: &str, data: Bytes) -> Result<(), ClipStoreError> {
        let path = StorePath::from(filename);
        self.inner
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| ClipStoreError::StoreFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, filename: &str) -> Result<Bytes, ClipStoreError> {
        let path = StorePath::from(filename);
        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|_| ClipStoreError::NotFound(filename.to_string()))?;

        result
            .bytes()
            .await
            .map_err(|e| ClipStoreError::FetchFailed(e.to_string()))
    }
}
