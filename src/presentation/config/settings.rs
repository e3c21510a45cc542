use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub clips_dir: PathBuf,
    pub transcripts_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub language: String,
    pub poll_interval_secs: u64,
    pub poll_max_wait_secs: u64,
    pub speechmatics_api_key: Option<String>,
    pub assemblyai_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl Settings {
    /// Reads everything from the environment; absent credentials leave the
    /// matching provider unconfigured rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            storage: StorageSettings {
                clips_dir: PathBuf::from(env_or("CLIPS_DIR", "audio_clips")),
                transcripts_dir: PathBuf::from(env_or("TRANSCRIPTS_DIR", "transcriptions")),
            },
            providers: ProviderSettings {
                language: env_or("TRANSCRIPTION_LANGUAGE", "lv"),
                poll_interval_secs: env_parsed("POLL_INTERVAL_SECS", 2),
                poll_max_wait_secs: env_parsed("POLL_MAX_WAIT_SECS", 300),
                speechmatics_api_key: std::env::var("SPEECHMATICS_API_KEY").ok(),
                assemblyai_api_key: std::env::var("ASSEMBLYAI_API_KEY").ok(),
                openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
