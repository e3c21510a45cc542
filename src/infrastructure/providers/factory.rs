use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{ProviderAdapter, ProviderError};
use crate::domain::ProviderId;

use super::assembly_ai::AssemblyAiAdapter;
use super::grok::GrokAdapter;
use super::poll::PollPolicy;
use super::speechmatics::SpeechmaticsAdapter;
use super::whisper::OpenAiWhisperAdapter;

/// Credentials for the known vendors; absent entries leave the provider
/// unconfigured rather than failing startup.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub speechmatics_api_key: Option<String>,
    pub assemblyai_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

pub struct AdapterFactory;

impl AdapterFactory {
    pub fn create(
        id: ProviderId,
        credentials: &ProviderCredentials,
        language: &str,
        poll: PollPolicy,
    ) -> Result<Arc<dyn ProviderAdapter>, ProviderError> {
        match id {
            ProviderId::Speechmatics => {
                let adapter = SpeechmaticsAdapter::new(
                    credentials.speechmatics_api_key.clone(),
                    None,
                    language.to_string(),
                    poll,
                )?;
                Ok(Arc::new(adapter))
            }
            ProviderId::AssemblyAi => {
                let adapter = AssemblyAiAdapter::new(
                    credentials.assemblyai_api_key.clone(),
                    None,
                    language.to_string(),
                    poll,
                )?;
                Ok(Arc::new(adapter))
            }
            ProviderId::Whisper => {
                let adapter = OpenAiWhisperAdapter::new(
                    credentials.openai_api_key.clone(),
                    None,
                    None,
                    language.to_string(),
                )?;
                Ok(Arc::new(adapter))
            }
            ProviderId::Grok => {
                let adapter = GrokAdapter::new(
                    credentials.anthropic_api_key.clone(),
                    None,
                    None,
                    language.to_string(),
                )?;
                Ok(Arc::new(adapter))
            }
        }
    }

    /// Builds adapters for every known provider, keeping construction
    /// failures as per-provider reasons instead of failing startup.
    pub fn build_registry(
        credentials: &ProviderCredentials,
        language: &str,
        poll: PollPolicy,
    ) -> (
        HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
        HashMap<ProviderId, String>,
    ) {
        let mut adapters = HashMap::new();
        let mut unavailable = HashMap::new();

        for id in ProviderId::ALL {
            match Self::create(id, credentials, language, poll) {
                Ok(adapter) => {
                    tracing::info!(provider = %id, "Provider adapter initialized");
                    adapters.insert(id, adapter);
                }
                Err(e) => {
                    tracing::warn!(provider = %id, reason = %e, "Provider unavailable");
                    unavailable.insert(id, e.to_string());
                }
            }
        }

        (adapters, unavailable)
    }
}
