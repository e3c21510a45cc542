use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use balss::application::services::TranscriptionDispatcher;
use balss::infrastructure::observability::{init_tracing, TracingConfig};
use balss::infrastructure::providers::{AdapterFactory, PollPolicy, ProviderCredentials};
use balss::infrastructure::storage::{LocalClipStore, LocalTranscriptStore};
use balss::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let credentials = ProviderCredentials {
        speechmatics_api_key: settings.providers.speechmatics_api_key.clone(),
        assemblyai_api_key: settings.providers.assemblyai_api_key.clone(),
        openai_api_key: settings.providers.openai_api_key.clone(),
        anthropic_api_key: settings.providers.anthropic_api_key.clone(),
    };
    let poll = PollPolicy {
        interval: Duration::from_secs(settings.providers.poll_interval_secs),
        max_wait: Duration::from_secs(settings.providers.poll_max_wait_secs),
    };

    let (adapters, unavailable) =
        AdapterFactory::build_registry(&credentials, &settings.providers.language, poll);
    tracing::info!(
        available = adapters.len(),
        unavailable = unavailable.len(),
        language = %settings.providers.language,
        "Provider registry assembled"
    );

    let dispatcher = Arc::new(TranscriptionDispatcher::new(adapters, unavailable));
    let clip_store = Arc::new(LocalClipStore::new(settings.storage.clips_dir.clone())?);
    let transcript_store = Arc::new(LocalTranscriptStore::new(
        settings.storage.transcripts_dir.clone(),
    )?);

    let state = AppState {
        dispatcher,
        clip_store,
        transcript_store,
    };
    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
