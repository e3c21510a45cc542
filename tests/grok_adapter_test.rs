use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use balss::application::ports::{ProviderAdapter, ProviderError};
use balss::domain::AudioClip;
use balss::infrastructure::providers::GrokAdapter;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1/messages",
        post(move || async move {
            let status = StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [("content-type", "application/json")],
                response_body,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn adapter(base_url: &str) -> GrokAdapter {
    GrokAdapter::new(
        Some("test-key".to_string()),
        Some(base_url.to_string()),
        None,
        "lv".to_string(),
    )
    .unwrap()
}

fn test_clip() -> AudioClip {
    AudioClip::new("clip.wav", Bytes::from_static(b"fake audio bytes"))
}

#[tokio::test]
async fn given_text_block_response_when_transcribing_then_returns_trimmed_text() {
    let body = r#"{"content": [{"type": "text", "text": " labdien "}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let result = adapter(&base_url).transcribe(&test_clip()).await;

    assert_eq!(result.unwrap(), "labdien");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_content_when_transcribing_then_empty_result_error() {
    let (base_url, shutdown_tx) = start_mock_server(200, r#"{"content": []}"#).await;

    let result = adapter(&base_url).transcribe(&test_clip()).await;

    assert!(matches!(result, Err(ProviderError::EmptyResult)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_transcribing_then_submission_error() {
    let body = r#"{"error": {"type": "invalid_request_error", "message": "bad request"}}"#;
    let (base_url, shutdown_tx) = start_mock_server(400, body).await;

    let result = adapter(&base_url).transcribe(&test_clip()).await;

    assert!(matches!(result, Err(ProviderError::Submission(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_api_key_when_constructing_then_configuration_error() {
    let result = GrokAdapter::new(None, None, None, "lv".to_string());

    assert!(matches!(result, Err(ProviderError::Configuration(_))));
}
