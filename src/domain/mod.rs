mod clip;
mod outcome;
mod provider_id;

pub use clip::{AudioClip, SUPPORTED_EXTENSIONS};
pub use outcome::{OutcomeStatus, TranscriptionOutcome};
pub use provider_id::ProviderId;
