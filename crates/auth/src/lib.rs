//! `productapi-auth` — API-key authentication gate.
//!
//! This crate is intentionally decoupled from HTTP: it decides, from a request
//! path and an optionally presented key, whether a request may proceed.

pub mod api_key;
pub mod error;
pub mod gate;
pub mod principal;
pub mod routes;

pub use api_key::{API_KEY_HEADER, ApiKey};
pub use error::AuthError;
pub use gate::{Admission, ApiKeyGate};
pub use principal::Principal;
pub use routes::PublicRoutes;
