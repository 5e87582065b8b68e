use subtle::ConstantTimeEq;

use crate::AuthError;

/// Header carrying the API key on every protected request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// The process-wide API key.
///
/// Read once at startup and never mutated. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, AuthError> {
        let key = key.into();
        if key.is_empty() {
            return Err(AuthError::EmptyKey);
        }
        Ok(Self(key))
    }

    /// Compare a presented key against the configured one in constant time.
    ///
    /// A missing key never matches.
    pub fn matches(&self, presented: Option<&str>) -> bool {
        match presented {
            Some(candidate) => self.0.as_bytes().ct_eq(candidate.as_bytes()).into(),
            None => false,
        }
    }

    /// The raw secret, for the test-key disclosure endpoint only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
