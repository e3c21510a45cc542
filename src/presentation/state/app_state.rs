use std::sync::Arc;

use crate::application::ports::{ClipStore, TranscriptStore};
use crate::application::services::TranscriptionDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<TranscriptionDispatcher>,
    pub clip_store: Arc<dyn ClipStore>,
    pub transcript_store: Arc<dyn TranscriptStore>,
}
