//! Product catalog (application-level orchestration).
//!
//! `ProductCatalog` sits between the HTTP layer and a [`ProductStore`]. It owns
//! the business rules that need the store to decide:
//!
//! ```text
//! create:  exists_by_name?            ── yes → NameTaken
//!            └─ no → store.create
//! update:  find_by_id?                ── no  → NotFound
//!            └─ exists_by_name_excluding(id)? ── yes → NameHeldByOther
//!                 └─ no → store.update (name/description/price replaced)
//! delete:  exists_by_id?              ── no  → NotFound
//!            └─ yes → store.delete
//! ```
//!
//! The name checks are check-then-act and race under concurrent writers. Stores
//! must enforce uniqueness themselves; their `DuplicateName` surfaces here as
//! the same error a failed pre-check would have produced.
//!
//! This module contains no IO itself; it composes the store trait.

use thiserror::Error;
use tracing::instrument;

use productapi_core::{Entity, ProductId};
use productapi_products::{Product, ProductDraft};

use crate::store::{ProductStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Another product already uses this name.
    #[error("Product with name '{0}' already exists")]
    NameTaken(String),

    /// Update tried to take a name held by a different product.
    #[error("Another product with name '{0}' already exists")]
    NameHeldByOther(String),

    #[error("Product not found with id: {0}")]
    NotFound(ProductId),

    /// Persisting or loading failed for reasons unrelated to the request.
    #[error(transparent)]
    Store(StoreError),
}

impl CatalogError {
    /// Map a store failure, reporting a uniqueness violation as `duplicate`.
    fn from_store(err: StoreError, duplicate: CatalogError) -> Self {
        match err {
            StoreError::DuplicateName(_) => duplicate,
            other => CatalogError::Store(other),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(name) => CatalogError::NameTaken(name),
            other => CatalogError::Store(other),
        }
    }
}

/// The five product operations, generic over the backing store.
#[derive(Debug, Clone)]
pub struct ProductCatalog<S> {
    store: S,
}

impl<S: ProductStore> ProductCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(name = %draft.name()), err(Display))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        if self.store.exists_by_name(draft.name()).await? {
            tracing::warn!("create rejected: name already exists");
            return Err(CatalogError::NameTaken(draft.name().to_string()));
        }

        let duplicate = CatalogError::NameTaken(draft.name().to_string());
        let product = self
            .store
            .create(draft)
            .await
            .map_err(|e| CatalogError::from_store(e, duplicate))?;

        tracing::info!(id = %product.id(), "product created");
        Ok(product)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.store.find_all().await?;
        tracing::debug!(count = products.len(), "products listed");
        Ok(products)
    }

    #[instrument(skip(self, draft), fields(id = %id, name = %draft.name()), err(Display))]
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, CatalogError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(CatalogError::NotFound(id));
        }

        if self.store.exists_by_name_excluding(draft.name(), id).await? {
            tracing::warn!("update rejected: name held by another product");
            return Err(CatalogError::NameHeldByOther(draft.name().to_string()));
        }

        let duplicate = CatalogError::NameHeldByOther(draft.name().to_string());
        let product = self
            .store
            .update(id, draft)
            .await
            .map_err(|e| CatalogError::from_store(e, duplicate))?
            // Deleted between the probe and the write.
            .ok_or(CatalogError::NotFound(id))?;

        tracing::info!("product updated");
        Ok(product)
    }

    #[instrument(skip(self), fields(id = %id), err(Display))]
    pub async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        if !self.store.exists_by_id(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        if !self.store.delete(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        tracing::info!("product deleted");
        Ok(())
    }
}
