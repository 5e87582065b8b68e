use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::ServiceInfo;
use crate::app::errors;

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Product Management API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/swagger-ui".to_string(),
    })
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Unknown paths. Only reached once the gate has admitted the request.
pub async fn not_found() -> impl IntoResponse {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "no route for this path")
}
