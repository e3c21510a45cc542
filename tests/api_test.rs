use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bytes::Bytes;
use tower::ServiceExt;

use balss::application::ports::{
    ClipStore, ClipStoreError, ProviderAdapter, ProviderError, StoredTranscript, TranscriptStore,
    TranscriptStoreError,
};
use balss::application::services::TranscriptionDispatcher;
use balss::domain::{AudioClip, ProviderId};
use balss::presentation::{create_router, AppState};

#[derive(Default)]
struct MemoryClipStore {
    clips: Mutex<HashMap<String, Bytes>>,
}

#[async_trait::async_trait]
impl ClipStore for MemoryClipStore {
    async fn store(&self, filename: &str, data: Bytes) -> Result<(), ClipStoreError> {
        self.clips
            .lock()
            .unwrap()
            .insert(filename.to_string(), data);
        Ok(())
    }

    async fn fetch(&self, filename: &str) -> Result<Bytes, ClipStoreError> {
        self.clips
            .lock()
            .unwrap()
            .get(filename)
            .cloned()
            .ok_or_else(|| ClipStoreError::NotFound(filename.to_string()))
    }
}

#[derive(Default)]
struct MemoryTranscriptStore {
    transcripts: Mutex<Vec<(String, StoredTranscript)>>,
}

#[async_trait::async_trait]
impl TranscriptStore for MemoryTranscriptStore {
    async fn save(
        &self,
        clip_stem: &str,
        provider: &str,
        transcript: &str,
    ) -> Result<(), TranscriptStoreError> {
        self.transcripts.lock().unwrap().push((
            clip_stem.to_string(),
            StoredTranscript {
                provider: provider.to_string(),
                text: transcript.to_string(),
            },
        ));
        Ok(())
    }

    async fn load_all(
        &self,
        clip_stem: &str,
    ) -> Result<Vec<StoredTranscript>, TranscriptStoreError> {
        Ok(self
            .transcripts
            .lock()
            .unwrap()
            .iter()
            .filter(|(stem, _)| stem == clip_stem)
            .map(|(_, t)| t.clone())
            .collect())
    }

    async fn delete_all(&self, clip_stem: &str) -> Result<Vec<String>, TranscriptStoreError> {
        let mut transcripts = self.transcripts.lock().unwrap();
        let deleted = transcripts
            .iter()
            .filter(|(stem, _)| stem == clip_stem)
            .map(|(_, t)| t.provider.clone())
            .collect();
        transcripts.retain(|(stem, _)| stem != clip_stem);
        Ok(deleted)
    }
}

struct StubAdapter {
    id: ProviderId,
    result: Result<String, String>,
}

#[async_trait::async_trait]
impl ProviderAdapter for StubAdapter {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn transcribe(&self, _clip: &AudioClip) -> Result<String, ProviderError> {
        self.result.clone().map_err(ProviderError::Transport)
    }
}

struct TestApp {
    clip_store: Arc<MemoryClipStore>,
    transcript_store: Arc<MemoryTranscriptStore>,
    state: AppState,
}

fn test_app(adapters: Vec<StubAdapter>) -> TestApp {
    let map: HashMap<ProviderId, Arc<dyn ProviderAdapter>> = adapters
        .into_iter()
        .map(|a| (a.id, Arc::new(a) as Arc<dyn ProviderAdapter>))
        .collect();
    let mut unavailable = HashMap::new();
    for id in ProviderId::ALL {
        if !map.contains_key(&id) {
            unavailable.insert(
                id,
                format!("missing configuration: {} API key is required", id),
            );
        }
    }

    let clip_store = Arc::new(MemoryClipStore::default());
    let transcript_store = Arc::new(MemoryTranscriptStore::default());
    let state = AppState {
        dispatcher: Arc::new(TranscriptionDispatcher::new(map, unavailable)),
        clip_store: Arc::clone(&clip_store) as Arc<dyn ClipStore>,
        transcript_store: Arc::clone(&transcript_store) as Arc<dyn TranscriptStore>,
    };

    TestApp {
        clip_store,
        transcript_store,
        state,
    }
}

fn whisper_app() -> TestApp {
    test_app(vec![StubAdapter {
        id: ProviderId::Whisper,
        result: Ok("sveika pasaule".to_string()),
    }])
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn multipart_upload(filename: &str, content: &str) -> Request<Body> {
    multipart_upload_field("file", filename, content)
}

fn multipart_upload_field(field_name: &str, filename: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--boundary\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: audio/wav\r\n\r\n{}\r\n--boundary--\r\n",
        field_name, filename, content
    );
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header("content-type", "multipart/form-data; boundary=boundary")
        .body(Body::from(body))
        .unwrap()
}

fn transcribe_request(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/transcribe")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn given_running_service_when_checking_health_then_reports_available_providers() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["available_providers"], serde_json::json!(["whisper"]));
}

#[tokio::test]
async fn given_partial_configuration_when_listing_providers_then_reasons_are_included() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(Request::get("/api/providers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let providers = body["providers"].as_array().unwrap();
    assert_eq!(providers.len(), ProviderId::ALL.len());

    let whisper = providers.iter().find(|p| p["id"] == "whisper").unwrap();
    assert_eq!(whisper["status"], "available");

    let speechmatics = providers
        .iter()
        .find(|p| p["id"] == "speechmatics")
        .unwrap();
    assert_eq!(speechmatics["status"], "unavailable");
    assert!(speechmatics["reason"]
        .as_str()
        .unwrap()
        .contains("configuration"));
}

#[tokio::test]
async fn given_supported_audio_file_when_uploading_then_stored_under_timestamped_name() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(multipart_upload("clip.wav", "fake audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let stored_name = body["filename"].as_str().unwrap().to_string();
    assert!(stored_name.ends_with("_clip.wav"));
    assert!(app.clip_store.clips.lock().unwrap().contains_key(&stored_name));
}

#[tokio::test]
async fn given_unsupported_extension_when_uploading_then_bad_request() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(multipart_upload("notes.txt", "not audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid file type"));
}

#[tokio::test]
async fn given_wrongly_named_multipart_field_when_uploading_then_bad_request() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(multipart_upload_field("attachment", "clip.wav", "fake audio"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No file provided");
    assert!(app.clip_store.clips.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_unknown_clip_when_transcribing_then_not_found() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(transcribe_request(serde_json::json!({
            "filename": "missing.wav",
            "providers": ["whisper"],
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_stored_clip_when_transcribing_then_results_and_persisted_transcripts() {
    let app = whisper_app();
    app.clip_store
        .store("test.wav", Bytes::from_static(b"fake audio"))
        .await
        .unwrap();
    let router = create_router(app.state.clone());

    let response = router
        .oneshot(transcribe_request(serde_json::json!({
            "filename": "test.wav",
            "providers": ["whisper"],
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["summary"]["total_providers"], 1);
    assert_eq!(body["summary"]["successful"], 1);
    assert_eq!(body["summary"]["failed"], 0);
    assert_eq!(body["results"][0]["provider"], "whisper");
    assert_eq!(body["results"][0]["status"], "success");
    assert_eq!(body["results"][0]["transcript"], "sveika pasaule");

    let saved = app.transcript_store.load_all("test").await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].provider, "whisper");
    assert_eq!(saved[0].text, "sveika pasaule");
}

#[tokio::test]
async fn given_unknown_provider_in_request_when_transcribing_then_error_outcome_not_failure() {
    let app = whisper_app();
    app.clip_store
        .store("test.wav", Bytes::from_static(b"fake audio"))
        .await
        .unwrap();
    let router = create_router(app.state);

    let response = router
        .oneshot(transcribe_request(serde_json::json!({
            "filename": "test.wav",
            "providers": ["whisper", "nosuch"],
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["summary"]["total_providers"], 2);
    assert_eq!(body["summary"]["successful"], 1);
    assert_eq!(body["summary"]["failed"], 1);
    assert_eq!(body["results"][1]["provider"], "nosuch");
    assert_eq!(body["results"][1]["status"], "error");
}

#[tokio::test]
async fn given_defaulted_providers_when_transcribing_then_available_set_is_used() {
    let app = whisper_app();
    app.clip_store
        .store("test.wav", Bytes::from_static(b"fake audio"))
        .await
        .unwrap();
    let router = create_router(app.state);

    let response = router
        .oneshot(transcribe_request(serde_json::json!({
            "filename": "test.wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["summary"]["total_providers"], 1);
    assert_eq!(body["results"][0]["provider"], "whisper");
}

#[tokio::test]
async fn given_saved_transcripts_when_fetching_results_then_returned_per_provider() {
    let app = whisper_app();
    app.transcript_store
        .save("test", "whisper", "labrīt")
        .await
        .unwrap();
    let router = create_router(app.state);

    let response = router
        .oneshot(
            Request::get("/api/results/test.wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["filename"], "test.wav");
    assert_eq!(body["results"][0]["provider"], "whisper");
    assert_eq!(body["results"][0]["transcript"], "labrīt");
}

#[tokio::test]
async fn given_no_saved_transcripts_when_fetching_results_then_not_found() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(
            Request::get("/api/results/missing.wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_saved_transcripts_when_deleting_results_then_store_is_emptied() {
    let app = whisper_app();
    app.transcript_store
        .save("test", "whisper", "labrīt")
        .await
        .unwrap();
    app.transcript_store
        .save("test", "grok", "labrīt")
        .await
        .unwrap();
    let router = create_router(app.state);

    let response = router
        .oneshot(
            Request::delete("/api/results/test.wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Deleted 2 results");
    assert_eq!(body["deleted"].as_array().unwrap().len(), 2);
    assert!(app
        .transcript_store
        .load_all("test")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn given_no_saved_transcripts_when_deleting_results_then_not_found() {
    let app = whisper_app();
    let router = create_router(app.state);

    let response = router
        .oneshot(
            Request::delete("/api/results/missing.wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
