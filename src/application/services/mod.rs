mod dispatcher;

pub use dispatcher::TranscriptionDispatcher;
