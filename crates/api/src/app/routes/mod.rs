use axum::Router;

pub mod auth;
pub mod common;
pub mod products;
pub mod system;

/// Versioned API routes.
pub fn router() -> Router {
    Router::new()
        .nest("/api/v1/products", products::router())
        .nest("/api/v1/auth", auth::router())
}
