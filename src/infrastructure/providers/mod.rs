mod assembly_ai;
mod factory;
mod grok;
mod poll;
mod speechmatics;
mod whisper;

pub use assembly_ai::AssemblyAiAdapter;
pub use factory::{AdapterFactory, ProviderCredentials};
pub use grok::GrokAdapter;
pub use poll::{poll_until_terminal, PollPolicy, PollState};
pub use speechmatics::SpeechmaticsAdapter;
pub use whisper::OpenAiWhisperAdapter;
