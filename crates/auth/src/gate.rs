//! Per-request admission decision.
//!
//! - No IO
//! - No panics
//! - Stateless: the decision depends only on the path, the presented key and
//!   the configuration captured at construction.

use crate::{ApiKey, AuthError, Principal, PublicRoutes};

/// Outcome of a successful gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Allow-listed path; no key was inspected.
    Public,
    /// Protected path with a matching key.
    Authenticated(Principal),
}

impl Admission {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Admission::Public => None,
            Admission::Authenticated(p) => Some(p),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    key: ApiKey,
    public: PublicRoutes,
}

impl ApiKeyGate {
    pub fn new(key: ApiKey, public: PublicRoutes) -> Self {
        Self { key, public }
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    /// Admit or reject a request.
    pub fn check(&self, path: &str, presented: Option<&str>) -> Result<Admission, AuthError> {
        if self.public.is_public(path) {
            return Ok(Admission::Public);
        }

        if self.key.matches(presented) {
            Ok(Admission::Authenticated(Principal::API_USER))
        } else {
            tracing::debug!(path, key_present = presented.is_some(), "api key rejected");
            Err(AuthError::InvalidOrMissingKey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> ApiKeyGate {
        ApiKeyGate::new(ApiKey::new("test-key").unwrap(), PublicRoutes::default())
    }

    #[test]
    fn protected_path_with_valid_key_is_authenticated() {
        let admission = gate().check("/api/v1/products", Some("test-key")).unwrap();
        assert_eq!(admission, Admission::Authenticated(Principal::API_USER));
        assert_eq!(admission.principal().map(|p| p.name()), Some("api-user"));
    }

    #[test]
    fn protected_path_without_key_is_rejected() {
        let err = gate().check("/api/v1/products", None).unwrap_err();
        assert_eq!(err, AuthError::InvalidOrMissingKey);
        assert_eq!(err.to_string(), "Invalid or missing API key");
    }

    #[test]
    fn protected_path_with_wrong_key_is_rejected() {
        assert_eq!(
            gate().check("/api/v1/products/1", Some("nope")).unwrap_err(),
            AuthError::InvalidOrMissingKey
        );
    }

    #[test]
    fn public_paths_skip_the_key_entirely() {
        let gate = gate();
        for path in ["/", "/favicon.ico", "/api/v1/auth/apikey", "/api-docs", "/swagger-ui"] {
            assert_eq!(gate.check(path, None).unwrap(), Admission::Public);
            assert_eq!(gate.check(path, Some("wrong")).unwrap(), Admission::Public);
        }
    }

    #[test]
    fn strict_gate_protects_substring_matches() {
        let gate = ApiKeyGate::new(ApiKey::new("k").unwrap(), PublicRoutes::strict());
        assert!(gate.check("/api/v1/products/swagger", None).is_err());
        assert!(gate.check("/api/v1/products/swagger", Some("k")).is_ok());
    }
}
