use std::fmt;
use std::str::FromStr;

/// Identifier for a configured speech-to-text vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Speechmatics,
    AssemblyAi,
    Whisper,
    Grok,
}

impl ProviderId {
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Speechmatics,
        ProviderId::AssemblyAi,
        ProviderId::Whisper,
        ProviderId::Grok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Speechmatics => "speechmatics",
            ProviderId::AssemblyAi => "assemblyai",
            ProviderId::Whisper => "whisper",
            ProviderId::Grok => "grok",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Speechmatics => "Speechmatics",
            ProviderId::AssemblyAi => "AssemblyAI",
            ProviderId::Whisper => "OpenAI Whisper",
            ProviderId::Grok => "Grok",
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speechmatics" => Ok(ProviderId::Speechmatics),
            "assemblyai" => Ok(ProviderId::AssemblyAi),
            "whisper" => Ok(ProviderId::Whisper),
            "grok" => Ok(ProviderId::Grok),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
