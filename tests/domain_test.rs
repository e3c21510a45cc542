use std::time::Duration;

use bytes::Bytes;

use balss::domain::{AudioClip, OutcomeStatus, ProviderId, TranscriptionOutcome};

#[test]
fn given_known_provider_strings_when_parsing_then_roundtrips_through_as_str() {
    for id in ProviderId::ALL {
        let parsed: ProviderId = id.as_str().parse().unwrap();
        assert_eq!(parsed, id);
    }
}

#[test]
fn given_unknown_provider_string_when_parsing_then_returns_error_naming_it() {
    let result = "deepgram".parse::<ProviderId>();

    let err = result.unwrap_err();
    assert!(err.contains("deepgram"));
}

#[test]
fn given_provider_id_when_displaying_then_matches_string_key() {
    assert_eq!(ProviderId::AssemblyAi.to_string(), "assemblyai");
    assert_eq!(ProviderId::Whisper.display_name(), "OpenAI Whisper");
}

#[test]
fn given_supported_extensions_when_checking_clip_then_accepted_case_insensitively() {
    for name in ["a.wav", "b.MP3", "c.m4a", "d.flac", "e.OGG"] {
        let clip = AudioClip::new(name, Bytes::new());
        assert!(clip.is_supported(), "{} should be supported", name);
    }
}

#[test]
fn given_unsupported_or_missing_extension_when_checking_clip_then_rejected() {
    assert!(!AudioClip::new("notes.txt", Bytes::new()).is_supported());
    assert!(!AudioClip::new("noextension", Bytes::new()).is_supported());
}

#[test]
fn given_clip_filename_when_mapping_mime_then_uses_extension_table() {
    assert_eq!(AudioClip::new("a.wav", Bytes::new()).mime_type(), "audio/wav");
    assert_eq!(AudioClip::new("a.m4a", Bytes::new()).mime_type(), "audio/mp4");
    assert_eq!(AudioClip::new("a.ogg", Bytes::new()).mime_type(), "audio/ogg");
    assert_eq!(AudioClip::new("a.mp3", Bytes::new()).mime_type(), "audio/mpeg");
}

#[test]
fn given_clip_with_timestamped_name_when_taking_stem_then_extension_is_dropped() {
    let clip = AudioClip::new("20250101_120000_clip.wav", Bytes::new());
    assert_eq!(clip.stem(), "20250101_120000_clip");
}

#[test]
fn given_success_outcome_when_constructed_then_only_transcript_is_populated() {
    let outcome =
        TranscriptionOutcome::success(ProviderId::Whisper, "labdien", Duration::from_millis(10));

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.provider, "whisper");
    assert_eq!(outcome.transcript.as_deref(), Some("labdien"));
    assert!(outcome.error.is_none());
}

#[test]
fn given_failure_outcome_when_constructed_then_only_error_is_populated() {
    let outcome = TranscriptionOutcome::failure("grok", "transport failure", Duration::ZERO);

    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert!(outcome.transcript.is_none());
    assert_eq!(outcome.error.as_deref(), Some("transport failure"));
}
