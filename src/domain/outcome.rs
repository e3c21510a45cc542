use std::time::Duration;

use super::ProviderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    Error,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Success => "success",
            OutcomeStatus::Error => "error",
        }
    }
}

/// Per-provider result of one dispatch. Exactly one of `transcript` and
/// `error` is populated, enforced by the constructors.
#[derive(Debug, Clone)]
pub struct TranscriptionOutcome {
    pub provider: String,
    pub status: OutcomeStatus,
    pub transcript: Option<String>,
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl TranscriptionOutcome {
    pub fn success(provider: ProviderId, transcript: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            provider: provider.as_str().to_string(),
            status: OutcomeStatus::Success,
            transcript: Some(transcript.into()),
            error: None,
            elapsed,
        }
    }

    pub fn failure(
        provider: impl Into<String>,
        message: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            provider: provider.into(),
            status: OutcomeStatus::Error,
            transcript: None,
            error: Some(message.into()),
            elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}
