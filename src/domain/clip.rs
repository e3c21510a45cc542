use bytes::Bytes;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["wav", "mp3", "m4a", "flac", "ogg"];

/// An uploaded audio clip. Adapters read the bytes but never interpret or
/// mutate them.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub filename: String,
    pub data: Bytes,
}

impl AudioClip {
    pub fn new(filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        self.filename.rsplit_once('.').map(|(_, ext)| ext)
    }

    pub fn is_supported(&self) -> bool {
        self.extension()
            .map(|ext| {
                let ext = ext.to_lowercase();
                SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().map(|e| e.to_lowercase()).as_deref() {
            Some("wav") => "audio/wav",
            Some("m4a") | Some("mp4") => "audio/mp4",
            Some("flac") => "audio/flac",
            Some("ogg") => "audio/ogg",
            _ => "audio/mpeg",
        }
    }

    /// Filename without its extension, used to key stored transcripts.
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.filename)
    }
}
