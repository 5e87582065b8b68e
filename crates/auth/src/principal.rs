/// The authenticated caller.
///
/// API-key auth knows a single implicit principal: whoever holds the key. There
/// are no roles or scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: &'static str,
}

impl Principal {
    pub const API_USER: Principal = Principal { name: "api-user" };

    pub fn name(&self) -> &'static str {
        self.name
    }
}
