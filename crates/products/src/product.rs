use chrono::{DateTime, Utc};
use productapi_core::{Entity, ProductId};

use crate::{Price, ProductDraft};

/// Persisted product.
///
/// Instances are produced by a store: the identifier and both timestamps are
/// assigned there, never by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Rebuild a product from stored fields.
    pub fn from_parts(
        id: ProductId,
        name: String,
        description: Option<String>,
        price: Price,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }

    /// A freshly inserted product: `updated_at == created_at`.
    pub fn inserted(id: ProductId, draft: ProductDraft, at: DateTime<Utc>) -> Self {
        let (name, description, price) = draft.into_parts();
        Self::from_parts(id, name, description, price, at, at)
    }

    /// Replace name, description and price wholesale.
    ///
    /// `created_at` is left untouched. `updated_at` moves to `at`, or just past
    /// the previous value if the clock did not advance.
    pub fn replace(&mut self, draft: ProductDraft, at: DateTime<Utc>) {
        let (name, description, price) = draft.into_parts();
        self.name = name;
        self.description = description;
        self.price = price;
        self.updated_at = at.max(self.updated_at + chrono::Duration::microseconds(1));
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

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft::new(name, None, price).unwrap()
    }

    #[test]
    fn inserted_product_has_equal_timestamps() {
        let now = Utc::now();
        let product = Product::inserted(ProductId::new(1), draft("Widget", 9.99), now);

        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.created_at(), product.updated_at());
    }

    #[test]
    fn replace_overwrites_every_mutable_field() {
        let now = Utc::now();
        let mut product = Product::inserted(
            ProductId::new(1),
            ProductDraft::new("Widget", Some("small".to_string()), 9.99).unwrap(),
            now,
        );

        product.replace(draft("Gadget", 12.0), now + chrono::Duration::seconds(1));

        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.description(), None);
        assert_eq!(product.price().amount(), 12.0);
        assert_eq!(product.created_at(), now);
        assert!(product.updated_at() > product.created_at());
    }

    #[test]
    fn replace_advances_updated_at_even_if_clock_stalls() {
        let now = Utc::now();
        let mut product = Product::inserted(ProductId::new(1), draft("Widget", 1.0), now);

        product.replace(draft("Widget", 2.0), now);
        let first = product.updated_at();
        product.replace(draft("Widget", 3.0), now);

        assert!(first > now);
        assert!(product.updated_at() > first);
    }
}
