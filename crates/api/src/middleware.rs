use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use productapi_auth::{API_KEY_HEADER, ApiKeyGate};

use crate::app::errors;
use crate::context::{PrincipalContext, RequestId};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AuthState {
    pub gate: Arc<ApiKeyGate>,
}

/// API-key gate: runs before any handler and short-circuits with 401.
pub async fn api_key_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    let decision = state.gate.check(req.uri().path(), presented);

    match decision {
        Ok(admission) => {
            if let Some(principal) = admission.principal() {
                let ctx = PrincipalContext::new(principal.clone());
                tracing::Span::current().record("principal", ctx.principal().name());
                req.extensions_mut().insert(ctx);
            }
            next.run(req).await
        }
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), "rejected unauthenticated request");
            errors::unauthorized(e)
        }
    }
}

/// Per-request span with method, path and a fresh request id; logs status and
/// latency on completion.
pub async fn trace_requests(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    let span = tracing::info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
        principal = tracing::field::Empty,
    );
    req.extensions_mut().insert(request_id);

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
