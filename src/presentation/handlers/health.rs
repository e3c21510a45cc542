use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub available_providers: Vec<String>,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let available = state
        .dispatcher
        .available_providers()
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            available_providers: available,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
