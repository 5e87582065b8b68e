use std::sync::Arc;

use axum::{extract::Extension, routing::post, Json, Router};

use productapi_auth::{ApiKeyGate, API_KEY_HEADER};

use crate::app::dto::ApiKeyResponse;

pub fn router() -> Router {
    Router::new().route("/apikey", post(api_key))
}

/// Get API key
///
/// Hands out the configured key. Reachable without a key.
#[utoipa::path(
    post,
    path = "/api/v1/auth/apikey",
    tag = "Authentication",
    responses(
        (status = 200, description = "The configured API key", body = ApiKeyResponse),
    )
)]
pub async fn api_key(Extension(gate): Extension<Arc<ApiKeyGate>>) -> Json<ApiKeyResponse> {
    tracing::debug!("api key requested");
    Json(ApiKeyResponse {
        api_key: gate.key().expose().to_string(),
        message: format!("Use this API key in {API_KEY_HEADER} header"),
    })
}
