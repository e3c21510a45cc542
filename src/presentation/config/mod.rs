mod settings;

pub use settings::{ProviderSettings, ServerSettings, Settings, StorageSettings};
