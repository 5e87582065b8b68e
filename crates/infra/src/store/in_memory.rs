use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use productapi_core::{Entity, ProductId};
use productapi_products::{Product, ProductDraft};

use super::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    /// Last id handed out; ids are never reused after delete.
    last_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<ProductId>) -> bool {
        self.rows
            .values()
            .any(|p| p.name() == name && Some(p.id()) != except)
    }
}

/// In-memory product table.
///
/// Intended for tests/dev. Enforces name uniqueness under the write lock, so it
/// behaves like a table with a `UNIQUE (name)` constraint.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::Backend("product table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::Backend("product table lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut table = self.write()?;
        if table.name_taken(draft.name(), None) {
            return Err(StoreError::DuplicateName(draft.name().to_string()));
        }

        table.last_id += 1;
        let id = ProductId::new(table.last_id);
        let product = Product::inserted(id, draft, Utc::now());
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        let mut table = self.write()?;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if table.name_taken(draft.name(), Some(id)) {
            return Err(StoreError::DuplicateName(draft.name().to_string()));
        }

        let Some(product) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        product.replace(draft, Utc::now());
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.read()?.rows.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.read()?.name_taken(name, None))
    }

    async fn exists_by_name_excluding(&self, name: &str, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.read()?.name_taken(name, Some(id)))
    }
}
