use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::ProviderId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderInfo>,
}

#[derive(Serialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub async fn providers_handler(State(state): State<AppState>) -> impl IntoResponse {
    let available = state.dispatcher.available_providers();

    let providers = ProviderId::ALL
        .iter()
        .map(|id| {
            let is_available = available.contains(id);
            ProviderInfo {
                id: id.as_str().to_string(),
                name: id.display_name().to_string(),
                status: if is_available {
                    "available".to_string()
                } else {
                    "unavailable".to_string()
                },
                reason: state
                    .dispatcher
                    .unavailable_reason(*id)
                    .map(str::to_string),
            }
        })
        .collect();

    (StatusCode::OK, Json(ProvidersResponse { providers }))
}
