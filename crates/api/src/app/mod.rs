//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and the product catalog
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `docs.rs`: OpenAPI document and docs page
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use productapi_auth::ApiKeyGate;

use crate::config::AppConfig;
use crate::middleware;

pub mod docs;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Every request passes the trace layer, then the API-key gate, then routing.
/// The fallback sits behind the gate so unknown paths without a key get 401.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(config).await?);
    let gate = Arc::new(ApiKeyGate::new(config.api_key.clone(), config.public_routes));
    let auth_state = middleware::AuthState { gate: gate.clone() };

    let app = Router::new()
        .route("/", get(routes::system::root))
        .route("/favicon.ico", get(routes::system::favicon))
        .route("/api-docs", get(docs::openapi_json))
        .route("/v3/api-docs", get(docs::openapi_json))
        .route("/swagger-ui", get(docs::swagger_ui))
        .route("/swagger-ui.html", get(docs::swagger_ui_redirect))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services))
                .layer(Extension(gate))
                .layer(axum::middleware::from_fn_with_state(
                    auth_state,
                    middleware::api_key_middleware,
                )),
        );

    Ok(app)
}
