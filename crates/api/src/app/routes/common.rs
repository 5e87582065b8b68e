use productapi_core::ProductId;

use crate::app::errors::ApiError;

/// Parse the `{id}` path segment; anything that is not an integer is a 400.
pub fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<ProductId>().map_err(ApiError::from)
}
