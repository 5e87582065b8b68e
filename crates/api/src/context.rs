use productapi_auth::Principal;
use uuid::Uuid;

/// Principal context for a request (set by the API-key gate).
///
/// Present on every request that passed the key check; absent on allow-listed
/// paths, which are admitted without inspecting the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}

/// Correlation id for a single request, echoed in the `x-request-id` header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Uses UUIDv7 so ids sort by arrival time in logs.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
