mod local_clip_store;
mod local_transcript_store;

pub use local_clip_store::LocalClipStore;
pub use local_transcript_store::LocalTranscriptStore;
