//! Validated create/update input.

use productapi_core::{DomainError, DomainResult};

use crate::Price;

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Name, description and price of a product, checked for presence and format.
///
/// Both create and update take a full draft: there is no partial update.
/// Uniqueness of the name is not checked here since it needs the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    description: Option<String>,
    price: Price,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if let Some(d) = &description {
            if d.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::validation(format!(
                    "description must be at most {MAX_DESCRIPTION_LEN} characters"
                )));
            }
        }

        Ok(Self {
            name,
            description,
            price: Price::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn into_parts(self) -> (String, Option<String>, Price) {
        (self.name, self.description, self.price)
    }
}
