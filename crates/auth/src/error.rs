use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request hit a protected path without the configured key.
    #[error("Invalid or missing API key")]
    InvalidOrMissingKey,

    /// The configured key is empty (startup misconfiguration).
    #[error("api key must not be empty")]
    EmptyKey,
}
