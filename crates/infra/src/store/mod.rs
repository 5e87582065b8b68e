//! Product persistence boundary.
//!
//! This module defines the storage-facing abstraction the catalog depends on,
//! plus one implementation per supported backend.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use thiserror::Error;

use productapi_core::ProductId;
use productapi_products::{Product, ProductDraft};

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store's own uniqueness constraint on `name` fired.
    #[error("duplicate product name: {0}")]
    DuplicateName(String),

    /// Connection, query or decoding failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Durable table of products.
///
/// Each method is a single atomic step. Implementations assign identifiers and
/// maintain `created_at`/`updated_at`; they must also reject duplicate names
/// with [`StoreError::DuplicateName`] so racing writers cannot both succeed.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product, assigning its id and timestamps.
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// All products in store order (ascending id).
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Replace name/description/price. Returns `None` if `id` does not exist.
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError>;

    /// Returns `false` if `id` did not exist.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError>;

    /// Whether a product *other than* `id` is named `name`.
    async fn exists_by_name_excluding(&self, name: &str, id: ProductId) -> Result<bool, StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).create(draft).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).exists_by_id(id).await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        (**self).exists_by_name(name).await
    }

    async fn exists_by_name_excluding(&self, name: &str, id: ProductId) -> Result<bool, StoreError> {
        (**self).exists_by_name_excluding(name, id).await
    }
}
