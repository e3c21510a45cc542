use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::ProviderAdapter;
use crate::domain::{AudioClip, ProviderId, TranscriptionOutcome};

/// Fans an audio clip out to the requested provider adapters and collects
/// one outcome per requested key, in request order. A provider failing at
/// any stage never aborts the others; `dispatch` itself cannot fail.
pub struct TranscriptionDispatcher {
    adapters: HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
    unavailable: HashMap<ProviderId, String>,
}

impl TranscriptionDispatcher {
    pub fn new(
        adapters: HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
        unavailable: HashMap<ProviderId, String>,
    ) -> Self {
        Self {
            adapters,
            unavailable,
        }
    }

    /// Provider ids with a constructed adapter, in the canonical order.
    pub fn available_providers(&self) -> Vec<ProviderId> {
        ProviderId::ALL
            .iter()
            .copied()
            .filter(|id| self.adapters.contains_key(id))
            .collect()
    }

    /// Why a known provider has no adapter, if construction failed.
    pub fn unavailable_reason(&self, id: ProviderId) -> Option<&str> {
        self.unavailable.get(&id).map(String::as_str)
    }

    pub async fn dispatch(
        &self,
        clip: &AudioClip,
        requested: &[String],
    ) -> Vec<TranscriptionOutcome> {
        let invocations = requested.iter().map(|key| self.run_one(clip, key));
        futures::future::join_all(invocations).await
    }

    async fn run_one(&self, clip: &AudioClip, key: &str) -> TranscriptionOutcome {
        let id: ProviderId = match key.parse() {
            Ok(id) => id,
            Err(reason) => {
                tracing::warn!(provider = %key, "Requested provider is not known");
                return TranscriptionOutcome::failure(key, reason, Duration::ZERO);
            }
        };

        let adapter = match self.adapters.get(&id) {
            Some(adapter) => adapter,
            None => {
                let reason = self
                    .unavailable
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| format!("missing configuration: {} is not configured", id));
                tracing::warn!(provider = %id, reason = %reason, "Provider is not available");
                return TranscriptionOutcome::failure(id.as_str(), reason, Duration::ZERO);
            }
        };

        tracing::info!(provider = %id, filename = %clip.filename, "Starting transcription");
        let started = Instant::now();

        match adapter.transcribe(clip).await {
            Ok(transcript) => {
                let elapsed = started.elapsed();
                tracing::info!(
                    provider = %id,
                    elapsed_secs = elapsed.as_secs_f64(),
                    chars = transcript.len(),
                    "Transcription completed"
                );
                TranscriptionOutcome::success(id, transcript, elapsed)
            }
            Err(e) => {
                let elapsed = started.elapsed();
                tracing::error!(
                    provider = %id,
                    elapsed_secs = elapsed.as_secs_f64(),
                    error = %e,
                    "Transcription failed"
                );
                TranscriptionOutcome::failure(id.as_str(), e.to_string(), elapsed)
            }
        }
    }
}
