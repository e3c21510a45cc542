use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::ProviderError;

/// Poll interval and total wait bound for submit-and-poll providers.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_wait: Duration::from_secs(300),
        }
    }
}

/// One status observation of an in-flight transcription job.
pub enum PollState<T> {
    Pending,
    Completed(T),
    Rejected(String),
}

/// Polls `poll` at `policy.interval` until it reports a terminal state.
/// Never sleeps past `policy.max_wait`; once the wait is exhausted it fails
/// with `ProviderError::Timeout` even if the job is still pending upstream.
pub async fn poll_until_terminal<T, F, Fut>(
    policy: PollPolicy,
    mut poll: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollState<T>, ProviderError>>,
{
    let deadline = Instant::now() + policy.max_wait;

    loop {
        match poll().await? {
            PollState::Completed(value) => return Ok(value),
            PollState::Rejected(reason) => return Err(ProviderError::Rejected(reason)),
            PollState::Pending => {}
        }

        if Instant::now() + policy.interval > deadline {
            return Err(ProviderError::Timeout(policy.max_wait));
        }
        tokio::time::sleep(policy.interval).await;
    }
}
