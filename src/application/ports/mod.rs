mod clip_store;
mod provider_adapter;
mod transcript_store;

pub use clip_store::{ClipStore, ClipStoreError};
pub use provider_adapter::{ProviderAdapter, ProviderError};
pub use transcript_store::{StoredTranscript, TranscriptStore, TranscriptStoreError};
