//! Allow-list of paths that bypass the API-key check.

/// Exact paths that never require a key.
const PUBLIC_PATHS: &[&str] = &["/", "/favicon.ico"];

/// Path prefixes that never require a key: documentation, Swagger UI assets
/// and the test-key endpoint.
const PUBLIC_PREFIXES: &[&str] = &[
    "/swagger-ui",
    "/api-docs",
    "/v3/api-docs",
    "/webjars",
    "/swagger-resources",
    "/api/v1/auth",
];

/// Documentation markers matched anywhere in the path (loose mode only).
const DOC_MARKERS: &[&str] = &["swagger", "api-docs"];

/// Which paths the gate lets through without a key.
///
/// The default (`loose`) also exempts any path that merely *contains* a
/// documentation marker, so e.g. `/api/v1/products/swagger` is public. That is
/// an over-exemption kept for compatibility with existing clients;
/// [`PublicRoutes::strict`] disables the substring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicRoutes {
    match_doc_substrings: bool,
}

impl PublicRoutes {
    pub fn loose() -> Self {
        Self {
            match_doc_substrings: true,
        }
    }

    pub fn strict() -> Self {
        Self {
            match_doc_substrings: false,
        }
    }

    pub fn is_strict(&self) -> bool {
        !self.match_doc_substrings
    }

    pub fn is_public(&self, path: &str) -> bool {
        if PUBLIC_PATHS.contains(&path) {
            return true;
        }
        if PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        self.match_doc_substrings && DOC_MARKERS.iter().any(|m| path.contains(m))
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::loose()
    }
}
